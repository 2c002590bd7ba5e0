//! Interactive terminal front-end for the account signup flow.
//!
//! Prompts for each registration field (with the same live input
//! normalization the mobile form applied), submits the draft, persists the
//! returned session tokens, and reports the route transition.

mod paths;

use std::fs;
use std::fs::File;
use std::sync::Arc;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use async_trait::async_trait;
use inquire::Confirm;
use inquire::DateSelect;
use inquire::Password;
use inquire::PasswordDisplayMode;
use inquire::Text;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

use onboard_lib::flow::Navigator;
use onboard_lib::flow::SignupFlow;
use onboard_lib::flow::SubmitOutcome;
use onboard_lib::model::Field;
use onboard_lib::model::RegistrationDraft;
use onboard_lib::store::SqliteStore;
use onboard_lib::store::StoreProvider;
use onboard_lib::SignupClient;

/// Navigator that reports route transitions on stdout.
struct ConsoleNavigator;

#[async_trait]
impl Navigator for ConsoleNavigator {
    async fn navigate(&self, route: &str) {
        println!("-> {route}");
    }
}

fn init_logger() {
    let Some(path) = paths::log_file() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }
}

/// Prompts for every form field and assembles the draft.
///
/// Raw answers are routed through the draft's field registry, so phone
/// masking and whitespace stripping behave exactly as they do in the form.
fn prompt_draft() -> Result<RegistrationDraft> {
    let mut draft = RegistrationDraft::new();

    draft.set(Field::FirstName, &Text::new("First Name").prompt()?);
    draft.set(Field::LastName, &Text::new("Last Name").prompt()?);
    draft.set(Field::Phone, &Text::new("Phone Number").prompt()?);
    draft.set(Field::Email, &Text::new("Email Address").prompt()?);
    draft.set(Field::Username, &Text::new("Username").prompt()?);
    draft.set(
        Field::Password,
        &Password::new("Password")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?,
    );
    draft.set(
        Field::ConfirmPassword,
        &Password::new("Confirm Password")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?,
    );
    draft.set_dob(DateSelect::new("Date of Birth").prompt()?);

    Ok(draft)
}

async fn run() -> Result<()> {
    let _ = dotenvy::dotenv();

    let endpoint = std::env::var("ONBOARD_URL")
        .context("ONBOARD_URL must point at the account-creation endpoint")?;

    let db_path = paths::session_db().ok_or_else(|| anyhow!("no data directory available"))?;
    if let Some(dir) = db_path.parent() {
        fs::create_dir_all(dir)?;
    }
    let store = Arc::new(SqliteStore::new(&db_path).await?);
    log::debug!("session store opened at {}", db_path.display());

    let client = SignupClient::builder().url(endpoint).build();
    let mut flow = SignupFlow::new(
        client,
        Arc::clone(&store) as Arc<dyn StoreProvider>,
        Arc::new(ConsoleNavigator),
    );

    if Confirm::new("Already have an account?")
        .with_default(false)
        .prompt()?
    {
        flow.go_to_login().await;
        return Ok(());
    }

    loop {
        let draft = prompt_draft()?;

        println!("Creating account...");
        match flow.submit(&draft).await {
            Ok(SubmitOutcome::Completed(session)) => {
                println!("Account created for user {}.", session.user_id);
                return Ok(());
            }
            Ok(SubmitOutcome::Rejected(message)) => {
                // The alert the form raised; the user edits and resubmits.
                println!("Cannot create account: {message}");
            }
            Err(err) => return Err(err.into()),
        }
    }
}

#[tokio::main]
async fn main() {
    init_logger();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
