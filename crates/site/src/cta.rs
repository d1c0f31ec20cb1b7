pub const FORM_ANCHOR: &str = "#consultation-form";

const CTA_TEMPLATE: &str = include_str!("templates/cta.html");

pub fn cta_section() -> &'static str {
    CTA_TEMPLATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cta_links_to_the_form_section() {
        let html = cta_section();
        assert!(html.contains(&format!(r##"href="{FORM_ANCHOR}""##)));
        assert!(html.contains("¿Listo para escalar tu negocio?"));
        assert!(html.contains("Agenda tu Consultoría Gratuita"));
        assert!(html.contains("Sin compromiso. Consultoría completamente gratuita de 30 minutos."));
    }

    #[test]
    fn cta_is_static() {
        assert_eq!(cta_section(), cta_section());
    }
}
