use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use clap::Subcommand;
use recipebook::config::Config;
use recipebook::config::load_config_or_default;
use recipebook::error::Result;
use recipebook::error::anyhow;
use recipebook::err_with_loc;
use recipebook::model::Recipe;
use recipebook::pages::LoginForm;
use recipebook::pages::SubmitOutcome;
use recipebook::pages::login_form::SignupFields;
use recipebook::service::ApiClient;
use recipebook::service::HttpIdentityService;
use recipebook::service::IdentityService;
use recipebook::service::RecipeService;
use recipebook::service::ReloadSignal;
use recipebook::service::SessionStore;
use recipebook::tracing::setup_tracing;
use tracing::warn;

#[derive(Parser)]
#[command(name = "recipebook", version, about = "Account and recipe client for the recipe book API")]
struct Cli {
    /// Configuration file; defaults apply when it does not exist.
    #[arg(long, env = "RECIPEBOOK_CONFIG", default_value = "Config.toml")]
    config: PathBuf,

    /// Overrides `api.base_url`.
    #[arg(long, env = "RECIPEBOOK_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and remember the session.
    Login {
        #[arg(long)]
        login: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account.
    Signup {
        #[arg(long)]
        login: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        password_confirm: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
    },
    /// Forget the remembered session.
    Logout,
    Recipes {
        #[command(subcommand)]
        command: RecipeCommand,
    },
}

#[derive(Subcommand)]
enum RecipeCommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
    },
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
    },
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = load_config_or_default(&cli.config)?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    let _tracing_guard = setup_tracing("recipebook", &config.logging)?;

    let session = SessionStore::new(&config.session.file);
    if let Err(e) = session.load() {
        warn!("failed_to_restore_session::{}::{}", session.file().display(), e);
    }
    let reload = ReloadSignal::new();
    let client = ApiClient::new(&config.api, session, reload.clone())?;

    let result = run(cli.command, &config, client).await;

    if reload.reload_count() > 0 {
        // the interceptor already logged out; a fresh run starts from scratch
        eprintln!("Authentication expired. Log in again.");
    }
    result
}

async fn run(command: Command, config: &Config, client: ApiClient) -> Result<()> {
    let identity: Arc<dyn IdentityService> = Arc::new(HttpIdentityService::new(client.clone(), &config.api));

    match command {
        Command::Login { login, password } => {
            let form = LoginForm::new(identity, config.form.clone());
            form.set_login(login);
            form.set_password(password);
            report(form.submit().await)
        },
        Command::Signup {
            login,
            password,
            password_confirm,
            first_name,
            last_name,
            email,
        } => {
            let form = LoginForm::new(identity, config.form.clone());
            form.use_signup_form();
            form.update_signup_fields(|fields| {
                *fields = SignupFields {
                    login,
                    password,
                    password_confirm,
                    first_name,
                    last_name,
                    email,
                }
            });
            report(form.submit().await)
        },
        Command::Logout => {
            identity.logout();
            println!("Logged out.");
            Ok(())
        },
        Command::Recipes { command } => run_recipes(command, RecipeService::new(client, &config.api)).await,
    }
}

async fn run_recipes(command: RecipeCommand, recipes: RecipeService) -> Result<()> {
    match command {
        RecipeCommand::List => {
            for recipe in recipes.list().await? {
                println!("{}\t{}\t{}", recipe.id.map(|id| id.to_string()).unwrap_or_default(), recipe.name, recipe.description);
            }
        },
        RecipeCommand::Create { name, description, ingredients } => {
            let created = recipes.create(&Recipe { id: None, name, description, ingredients }).await?;
            println!("{}", serde_json::to_string_pretty(&created)?);
        },
        RecipeCommand::Update { id, name, description, ingredients } => {
            recipes.update(&Recipe { id: Some(id), name, description, ingredients }).await?;
            println!("Recipe {id} updated.");
        },
        RecipeCommand::Delete { id } => {
            recipes.delete(id).await?;
            println!("Recipe {id} deleted.");
        },
    }
    Ok(())
}

fn report(outcome: SubmitOutcome) -> Result<()> {
    match outcome {
        SubmitOutcome::LoggedIn(session) => {
            println!("Logged in as {}.", session.login);
            Ok(())
        },
        SubmitOutcome::SignedUp(account) => {
            println!("Account {} created.", account.login);
            Ok(())
        },
        SubmitOutcome::Invalid(errors) => {
            for error in &errors {
                eprintln!("  {error}");
            }
            Err(anyhow!("The form has {} invalid field(s)", errors.len()))
        },
        SubmitOutcome::Failed(message) => Err(anyhow!(message)),
        SubmitOutcome::Busy | SubmitOutcome::Discarded => Err(err_with_loc!("The request did not complete")),
    }
}
