use server_api::ApiContext;
use site::WhatsAppContact;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) api: ApiContext,
    pub(crate) contact: WhatsAppContact,
}
