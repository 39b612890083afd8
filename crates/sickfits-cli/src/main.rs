use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use sickfits_cli::{accounts, seeder};
use sickfits_config::DatabaseConfig;
use sickfits_db::{PgPool, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "sickfits-cli")]
#[command(about = "Sick Fits CLI - Administrative tools for the Sick Fits backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert the demo product catalogue
    Seed,
    /// Remove all products and product images (keeps users)
    ClearSeed,
    /// Create the first user account; refused once any account exists
    CreateFirstUser {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sickfits_cli=info".into()),
        )
        .compact()
        .init();

    let cli = Cli::parse();

    let database = DatabaseConfig::from_env();
    let pool = match init_db_pool(&database).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool).await {
        eprintln!("❌ Failed to run migrations: {}", e);
        std::process::exit(1);
    }

    match cli.command {
        Commands::Seed => handle_seed(&pool).await,
        Commands::ClearSeed => handle_clear_seed(&pool).await,
        Commands::CreateFirstUser {
            name,
            email,
            password,
        } => handle_create_first_user(&pool, name, email, password).await,
    }
}

async fn handle_seed(pool: &PgPool) {
    match seeder::insert_seed_data(pool).await {
        Ok(count) => println!("✅ Inserted {} products", count),
        Err(e) => {
            eprintln!("\n❌ Error seeding database: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_clear_seed(pool: &PgPool) {
    match seeder::clear_seed_data(pool).await {
        Ok(count) => println!("✅ Removed {} products", count),
        Err(e) => {
            eprintln!("\n❌ Error clearing seeded data: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_create_first_user(
    pool: &PgPool,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) {
    match accounts::needs_first_item(pool).await {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("❌ An account already exists; sign in to create more.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ Error checking existing accounts: {}", e);
            std::process::exit(1);
        }
    }

    let name = name.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Name")
            .interact_text()
            .expect("Failed to read name")
    });

    let email = email.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Email address")
            .interact_text()
            .expect("Failed to read email")
    });

    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .expect("Failed to read password")
    });

    if password.len() < 8 {
        eprintln!("❌ Password must be at least 8 characters");
        std::process::exit(1);
    }

    match accounts::create_first_item(pool, &name, &email, &password).await {
        Ok(user) => {
            println!("\n✅ First account created!");
            println!("   Name: {}", user.name);
            println!("   Email: {}", user.email);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating first account: {}", e.error);
            std::process::exit(1);
        }
    }
}
