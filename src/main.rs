use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use efarm_client::auth::{AuthError, AuthGateway};
use efarm_client::config::ApiConfig;
use efarm_client::guards::{self, LoggingNavigator, Navigator};
use efarm_client::net::types::{LoginRequest, NewUser};
use efarm_client::net::{ApiClient, ApiError};
use efarm_client::services::{cows, dashboard, lactations, milk, pregnancies};
use efarm_client::session::{FileTokenStore, SessionContext};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("access denied for `{0}`")]
    AccessDenied(&'static str),
}

#[derive(Parser, Debug)]
#[command(name = "efarm", about = "eFarm dairy management API client")]
struct Cli {
    #[arg(long, env = "EFARM_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new farm staff account.
    Register(RegisterArgs),
    /// Log in and store the auth token.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Log out and discard the stored token.
    Logout,
    /// Show the current authentication state and profile.
    Status,
    Cow(CowCommand),
    Milk(MilkCommand),
    Pregnancy(PregnancyCommand),
    Lactation(LactationCommand),
    /// Print every admin dashboard widget at once.
    Dashboard,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    phone_number: String,
    #[arg(long)]
    sex: String,
    #[arg(long, default_value_t = false)]
    farm_owner: bool,
    #[arg(long, default_value_t = false)]
    farm_manager: bool,
    #[arg(long, default_value_t = false)]
    assistant_farm_manager: bool,
    #[arg(long, default_value_t = true)]
    farm_worker: bool,
}

#[derive(Args, Debug)]
struct CowCommand {
    #[command(subcommand)]
    command: CrudSubcommand,
}

#[derive(Args, Debug)]
struct MilkCommand {
    #[command(subcommand)]
    command: CrudSubcommand,
}

#[derive(Args, Debug)]
struct PregnancyCommand {
    #[command(subcommand)]
    command: PregnancySubcommand,
}

#[derive(Args, Debug)]
struct LactationCommand {
    #[command(subcommand)]
    command: LactationSubcommand,
}

#[derive(Subcommand, Debug)]
enum CrudSubcommand {
    List,
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
enum PregnancySubcommand {
    List,
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
    /// Pregnancies for one cow.
    ForCow {
        cow_id: i64,
    },
    /// Pregnancies due within a date range.
    Due {
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
    },
}

#[derive(Subcommand, Debug)]
enum LactationSubcommand {
    List,
    Get { id: i64 },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = ApiConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config = ApiConfig { base_url: base_url.trim_end_matches('/').to_string(), ..config };
    }

    let session = Arc::new(SessionContext::new(Box::new(FileTokenStore::new(
        config.token_file.clone(),
    ))));
    let api = ApiClient::new(&config, session)?;
    let navigator = Arc::new(LoggingNavigator);
    let auth = AuthGateway::new(api, navigator.clone());

    match cli.command {
        Command::Register(args) => run_register(&auth, navigator.as_ref(), args).await,
        Command::Login { username, password } => {
            run_login(&auth, navigator.as_ref(), username, password).await
        }
        Command::Logout => run_logout(&auth, navigator.as_ref()).await,
        Command::Status => run_status(&auth).await,
        Command::Cow(cow) => {
            require(guards::farm_worker_guard(&auth, navigator.as_ref()).await, "cow")?;
            run_cow(auth.api(), cow.command).await
        }
        Command::Milk(milk) => {
            require(guards::farm_worker_guard(&auth, navigator.as_ref()).await, "milk")?;
            run_milk(auth.api(), milk.command).await
        }
        Command::Pregnancy(pregnancy) => {
            require(
                guards::farm_worker_guard(&auth, navigator.as_ref()).await,
                "pregnancy",
            )?;
            run_pregnancy(auth.api(), pregnancy.command).await
        }
        Command::Lactation(lactation) => {
            require(
                guards::farm_worker_guard(&auth, navigator.as_ref()).await,
                "lactation",
            )?;
            run_lactation(auth.api(), lactation.command).await
        }
        Command::Dashboard => {
            require(
                guards::farm_manager_guard(&auth, navigator.as_ref()).await,
                "dashboard",
            )?;
            run_dashboard(auth.api()).await
        }
    }
}

fn require(allowed: bool, view: &'static str) -> Result<(), CliError> {
    if allowed { Ok(()) } else { Err(CliError::AccessDenied(view)) }
}

async fn run_register(
    auth: &AuthGateway,
    navigator: &dyn Navigator,
    args: RegisterArgs,
) -> Result<(), CliError> {
    require(guards::registration_guard(auth, navigator).await, "register")?;

    let new_user = NewUser {
        username: args.username,
        password: args.password,
        first_name: args.first_name,
        last_name: args.last_name,
        phone_number: args.phone_number,
        sex: args.sex,
        is_farm_owner: args.farm_owner,
        is_farm_manager: args.farm_manager,
        is_assistant_farm_manager: args.assistant_farm_manager,
        is_farm_worker: args.farm_worker,
    };
    let greeting = auth.register_user(&new_user).await?;
    println!("{greeting}");
    Ok(())
}

async fn run_login(
    auth: &AuthGateway,
    navigator: &dyn Navigator,
    username: String,
    password: String,
) -> Result<(), CliError> {
    require(guards::login_guard(auth, navigator).await, "login")?;

    auth.login(&LoginRequest { username, password }).await?;
    println!("logged in");
    Ok(())
}

async fn run_logout(auth: &AuthGateway, navigator: &dyn Navigator) -> Result<(), CliError> {
    require(guards::logout_guard(auth, navigator).await, "logout")?;

    auth.logout().await?;
    println!("logged out");
    Ok(())
}

async fn run_status(auth: &AuthGateway) -> Result<(), CliError> {
    if !auth.verify_token().await {
        println!("not authenticated");
        return Ok(());
    }
    let profile = auth.current_user().await?;
    println!("authenticated as {} (#{})", profile.username, profile.id);
    let flags = auth.session().flags();
    println!(
        "roles: owner={} manager={} assistant_manager={} worker={}",
        flags.is_farm_owner, flags.is_farm_manager, flags.is_assistant_farm_manager, flags.is_farm_worker
    );
    Ok(())
}

async fn run_cow(api: &ApiClient, command: CrudSubcommand) -> Result<(), CliError> {
    match command {
        CrudSubcommand::List => print_json(&cows::list(api).await?),
        CrudSubcommand::Get { id } => print_json(&cows::get(api, id).await?),
        CrudSubcommand::Create { data } => {
            let body = serde_json::from_str::<Value>(&data)?;
            print_json(&cows::create(api, &body).await?)
        }
        CrudSubcommand::Update { id, data } => {
            let body = serde_json::from_str::<Value>(&data)?;
            print_json(&cows::update(api, id, &body).await?)
        }
        CrudSubcommand::Delete { id } => {
            cows::delete(api, id).await?;
            println!("deleted cow {id}");
            Ok(())
        }
    }
}

async fn run_milk(api: &ApiClient, command: CrudSubcommand) -> Result<(), CliError> {
    match command {
        CrudSubcommand::List => print_json(&milk::list(api).await?),
        CrudSubcommand::Get { id } => print_json(&milk::get(api, id).await?),
        CrudSubcommand::Create { data } => {
            let body = serde_json::from_str::<Value>(&data)?;
            print_json(&milk::create(api, &body).await?)
        }
        CrudSubcommand::Update { id, data } => {
            let body = serde_json::from_str::<Value>(&data)?;
            print_json(&milk::update(api, id, &body).await?)
        }
        CrudSubcommand::Delete { id } => {
            milk::delete(api, id).await?;
            println!("deleted milk record {id}");
            Ok(())
        }
    }
}

async fn run_pregnancy(api: &ApiClient, command: PregnancySubcommand) -> Result<(), CliError> {
    match command {
        PregnancySubcommand::List => print_json(&pregnancies::list(api).await?),
        PregnancySubcommand::Get { id } => print_json(&pregnancies::get(api, id).await?),
        PregnancySubcommand::Create { data } => {
            let body = serde_json::from_str::<Value>(&data)?;
            print_json(&pregnancies::create(api, &body).await?)
        }
        PregnancySubcommand::Update { id, data } => {
            let body = serde_json::from_str::<Value>(&data)?;
            print_json(&pregnancies::update(api, id, &body).await?)
        }
        PregnancySubcommand::Delete { id } => {
            pregnancies::delete(api, id).await?;
            println!("deleted pregnancy {id}");
            Ok(())
        }
        PregnancySubcommand::ForCow { cow_id } => {
            print_json(&pregnancies::list_for_cow(api, cow_id).await?)
        }
        PregnancySubcommand::Due { start, end } => {
            print_json(&pregnancies::list_due_between(api, &start, &end).await?)
        }
    }
}

async fn run_lactation(api: &ApiClient, command: LactationSubcommand) -> Result<(), CliError> {
    match command {
        LactationSubcommand::List => print_json(&lactations::list(api).await?),
        LactationSubcommand::Get { id } => print_json(&lactations::get(api, id).await?),
    }
}

async fn run_dashboard(api: &ApiClient) -> Result<(), CliError> {
    let summary = dashboard::summary(api).await?;
    println!(
        "herd: {} alive ({} female, {} male), {} pregnant, {} lactating",
        summary.alive_cows.total_alive_cows,
        summary.alive_female_cows.total_alive_female_cows,
        summary.alive_male_cows.total_alive_male_cows,
        summary.pregnant_cows.pregnancies_count,
        summary.lactating_cows.lactating_cows_count,
    );
    println!(
        "milk: {} kg today, {} kg yesterday ({:+.1}%)",
        summary.daily_milk.total_milk_today,
        summary.daily_milk.total_milk_yesterday,
        summary.daily_milk.percentage_difference,
    );
    println!(
        "milking: {} milked today, {} still to milk",
        summary.milked_cows.cows_milked_today, summary.milked_cows.cows_unmilked_today,
    );
    for entry in milk::weekly_chart(api).await? {
        let total: f64 = entry.milk_records.iter().map(|record| record.total_milk).sum();
        println!("  {}: {total} kg", entry.day);
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
