use anyhow::Result;
use climate_core::{ChatSession, Config, LocationQuery, chat::FAQS};
use inquire::{CustomType, InquireError, Select, Text};

const ASK_OWN: &str = "Escribir una pregunta";
const QUIT: &str = "Salir";

/// Prompt for the chat webhook and home location, editing `config` in place.
pub fn configure(config: &mut Config) -> Result<()> {
    let current = config.chat_webhook_url.clone().unwrap_or_default();
    let url = Text::new("Chat webhook URL:").with_initial_value(&current).prompt()?;
    if !url.trim().is_empty() {
        config.set_chat_webhook_url(url.trim().to_string());
    }

    let home = config.home_or_default();
    let latitude = CustomType::<f64>::new("Home latitude:")
        .with_default(home.latitude)
        .with_error_message("Please type a number")
        .prompt()?;
    let longitude = CustomType::<f64>::new("Home longitude:")
        .with_default(home.longitude)
        .with_error_message("Please type a number")
        .prompt()?;
    config.set_home(LocationQuery::new(latitude, longitude));

    Ok(())
}

/// Interactive loop: pick an FAQ or type a question. Esc or "Salir" ends it.
pub async fn chat(session: &mut ChatSession) -> Result<()> {
    let mut options: Vec<&str> = FAQS.to_vec();
    options.push(ASK_OWN);
    options.push(QUIT);

    loop {
        let choice = match Select::new("Asistente climático:", options.clone()).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        let question = match choice {
            QUIT => break,
            ASK_OWN => match Text::new("Pregunta:").prompt() {
                Ok(text) => text,
                Err(InquireError::OperationCanceled) => continue,
                Err(InquireError::OperationInterrupted) => break,
                Err(err) => return Err(err.into()),
            },
            faq => faq.to_string(),
        };

        if let Some(reply) = session.send(&question).await {
            println!("{reply}\n");
        }
    }

    Ok(())
}
