use clap::{Args, Parser, Subcommand};
use people_cms::{
    cli::{
        db::{db_generate, db_list, db_migrate, db_revert, MIGRATIONS_DIR},
        people::{people_add, people_delete, people_list, people_modify, PersonFields},
    },
    core::{db::init_pool, logging::init_tracing},
    settings::get_config,
    ui::{HttpPeopleApi, PeopleApp},
};
use tracing::Level;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database related command
    Db(DbArgs),
    /// Manage people through the running API
    People(PeopleArgs),
}

#[derive(Debug, Args)]
struct DbArgs {
    #[command(subcommand)]
    command: DbCommands,
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Generate new migration file
    Generate { migration_name: String },
    /// List all migration
    List,
    /// Run all pending migration
    Migrate,
    /// Revert latest migration
    Revert,
}

#[derive(Debug, Args)]
struct PeopleArgs {
    #[command(subcommand)]
    command: PeopleCommands,
}

#[derive(Debug, Args)]
struct FieldArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    mobile_number: Option<String>,
    #[arg(long)]
    date_of_birth: Option<String>,
}

impl From<FieldArgs> for PersonFields {
    fn from(value: FieldArgs) -> Self {
        Self {
            name: value.name,
            email: value.email,
            mobile_number: value.mobile_number,
            date_of_birth: value.date_of_birth,
        }
    }
}

#[derive(Debug, Subcommand)]
enum PeopleCommands {
    /// List all people
    List,
    /// Add new person
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        mobile_number: String,
        #[arg(long)]
        date_of_birth: String,
    },
    /// Modify person, unspecified fields keep their value
    Modify {
        #[arg(long)]
        id: i32,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete person
    Delete {
        #[arg(long)]
        id: i32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = get_config()?;
    let _guard = init_tracing(config.log_dir.as_deref(), Level::INFO);
    tracing::info!("using {} as environment variable", config.env_source());
    match cli.command {
        Commands::Db(db_args) => match db_args.command {
            DbCommands::Generate { migration_name } => {
                println!("generate migration: {migration_name:?}");
                db_generate(MIGRATIONS_DIR, &migration_name).await?;
            }
            DbCommands::List => {
                println!("list migration");
                let pool = init_pool(&config).await?;
                db_list(&pool).await?;
            }
            DbCommands::Migrate => {
                println!("run migration on {}", config.database_url);
                let pool = init_pool(&config).await?;
                db_migrate(&pool).await?;
            }
            DbCommands::Revert => {
                println!("revert latest migration");
                let pool = init_pool(&config).await?;
                db_revert(&pool).await?;
            }
        },
        Commands::People(people_args) => {
            let mut app = PeopleApp::new(HttpPeopleApi::new(&config.api_url()));
            match people_args.command {
                PeopleCommands::List => people_list(&mut app).await,
                PeopleCommands::Add {
                    name,
                    email,
                    mobile_number,
                    date_of_birth,
                } => {
                    let fields = PersonFields {
                        name: Some(name),
                        email: Some(email),
                        mobile_number: Some(mobile_number),
                        date_of_birth: Some(date_of_birth),
                    };
                    let outcome = people_add(&mut app, fields).await;
                    println!("{outcome:?}");
                }
                PeopleCommands::Modify { id, fields } => {
                    match people_modify(&mut app, id, fields.into()).await {
                        Some(outcome) => println!("{outcome:?}"),
                        None => println!("person with id = {id} not found"),
                    }
                }
                PeopleCommands::Delete { id } => people_delete(&mut app, id).await,
            }
            print!("{}", app.render());
        }
    }
    Ok(())
}
