use clap::{Arg, ArgAction, Command};
use diesel::{Connection, PgConnection};
use team_todo::{error::AppError, services::UsersService};

fn cli() -> Command {
    Command::new("seed-users")
        .version("1.0")
        .about("Manage the public user directory used for todo assignment")
        .arg(
            Arg::new("database-url")
                .long("database-url")
                .value_name("URL")
                .env("DATABASE_URL")
                .help("Postgres connection string")
                .required(true),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("add").about("Add emails to the directory").arg(
                Arg::new("emails")
                    .value_name("EMAIL")
                    .help("Emails to add; existing entries are skipped")
                    .required(true)
                    .action(ArgAction::Append),
            ),
        )
        .subcommand(Command::new("list").about("Print every email in the directory"))
}

fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let matches = cli().get_matches();

    let database_url = matches
        .get_one::<String>("database-url")
        .ok_or_else(|| AppError::Config("DATABASE_URL must be set".to_string()))?;

    let mut conn = PgConnection::establish(database_url)
        .map_err(|e| AppError::internal(format!("Failed to connect to database: {}", e)))?;

    match matches.subcommand() {
        Some(("add", sub)) => {
            let emails: Vec<String> = sub
                .get_many::<String>("emails")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            let inserted = UsersService::add_emails(&mut conn, &emails)?;
            println!("Added {} of {} email(s)", inserted, emails.len());
        }
        Some(("list", _)) => {
            for user in UsersService::directory(&mut conn)? {
                println!("{}\t{}", user.id, user.email);
            }
        }
        _ => return Err(AppError::Config("Unknown subcommand".to_string())),
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
