use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use server_api::{
    parse_form,
    templates::{
        admin_subject, render_admin_email, render_customer_email, SubmissionMeta,
        CUSTOMER_SUBJECT,
    },
    validate,
};
use site::{WhatsAppContact, DEFAULT_MESSAGE, DEFAULT_PHONE};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(about = "Offline previews of the consultation emails and site widgets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one of the two consultation emails from a JSON form body.
    Preview {
        #[arg(value_enum)]
        email: EmailKind,
        /// Path to a JSON file shaped like the form submission.
        input: PathBuf,
        /// Write the HTML here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the floating button's deep link.
    WhatsappLink {
        #[arg(long, default_value = DEFAULT_PHONE)]
        phone: String,
        #[arg(long, default_value = DEFAULT_MESSAGE)]
        message: String,
    },
    /// Print the landing page hosting both widgets.
    Landing {
        #[arg(long, default_value = DEFAULT_PHONE)]
        phone: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EmailKind {
    Admin,
    Customer,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Preview {
            email,
            input,
            output,
        } => {
            let raw = fs::read(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let request = validate(parse_form(&raw)?)?;

            let (subject, html) = match email {
                EmailKind::Admin => {
                    let meta = SubmissionMeta {
                        submission_id: Uuid::new_v4(),
                        received_at: Utc::now(),
                    };
                    (admin_subject(&request), render_admin_email(&request, &meta)?)
                }
                EmailKind::Customer => {
                    (CUSTOMER_SUBJECT.to_string(), render_customer_email(&request)?)
                }
            };

            eprintln!("subject: {subject}");
            match output {
                Some(path) => {
                    fs::write(&path, html)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("wrote {}", path.display());
                }
                None => println!("{html}"),
            }
        }
        Command::WhatsappLink { phone, message } => {
            println!("{}", WhatsAppContact::new(&phone, message).link());
        }
        Command::Landing { phone } => {
            let contact = WhatsAppContact::new(&phone, DEFAULT_MESSAGE);
            println!("{}", site::landing_page(&contact));
        }
    }

    Ok(())
}
