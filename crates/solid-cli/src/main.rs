//! SOLID CLI - Person/Employee management
//!
//! Talks to the SOLID example API and runs the local substitutability demo.

mod api;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use api::{CreateEmployeeRequest, CreatePersonRequest, SolidClient};
use config::Config;

#[derive(Parser)]
#[command(name = "solid")]
#[command(about = "SOLID CLI - Person/Employee management", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how an Employee behaves through the general Person view
    Demo,

    /// Person operations
    Person {
        #[command(subcommand)]
        action: PersonAction,
    },

    /// Employee operations
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum PersonAction {
    /// Create a Person
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: i32,
        #[arg(long)]
        address: String,
    },
    /// Get a Person by ID
    Get {
        id: i64,
    },
    /// List all Persons
    List,
}

#[derive(Subcommand)]
enum EmployeeAction {
    /// Create an Employee
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: i32,
        #[arg(long)]
        address: String,
        /// Employee identifier (e.g., "EMP123")
        #[arg(long)]
        employee_id: String,
        #[arg(long, default_value = "0")]
        salary: f64,
    },
    /// Get an Employee by ID
    Get {
        id: i64,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set the API base URL
    SetUrl {
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => cmd_demo(),
        Commands::Person { action } => cmd_person(action).await,
        Commands::Employee { action } => cmd_employee(action).await,
        Commands::Config { action } => cmd_config(action).await,
    }
}

// ============================================
// Command Implementations
// ============================================

fn cmd_demo() -> Result<()> {
    for entry in solid::demo::substitutability_transcript() {
        println!("{}", entry.label.bold());
        for line in entry.output.lines() {
            println!("  {}", line);
        }
    }

    println!(
        "\n{}",
        "The last entry was used through the Person view, yet still prints the employee line."
            .yellow()
    );

    Ok(())
}

fn client() -> Result<SolidClient> {
    let config = Config::load()?;
    Ok(SolidClient::new(&config.base_url))
}

async fn cmd_person(action: PersonAction) -> Result<()> {
    let client = client()?;

    match action {
        PersonAction::Create { name, age, address } => {
            let person = client
                .create_person(&CreatePersonRequest {
                    name: &name,
                    age,
                    address: &address,
                })
                .await?;

            println!(
                "{} Person {} created (id {})",
                "✓".green(),
                person.name.cyan(),
                display_id(person.id)
            );
        }

        PersonAction::Get { id } => {
            let person = client.get_person(id).await?;
            println!(
                "  {} {} ({}) {}",
                display_id(person.id).dimmed(),
                person.name.cyan().bold(),
                person.age,
                person.address.as_deref().unwrap_or("-").dimmed()
            );
        }

        PersonAction::List => {
            let persons = client.list_persons().await?;

            if persons.is_empty() {
                println!("No Persons found.");
                return Ok(());
            }

            println!("{}", "Persons:".bold());
            for person in persons {
                println!(
                    "  {} {} ({}) {}",
                    display_id(person.id).dimmed(),
                    person.name.cyan().bold(),
                    person.age,
                    person.address.as_deref().unwrap_or("-").dimmed()
                );
            }
        }
    }

    Ok(())
}

async fn cmd_employee(action: EmployeeAction) -> Result<()> {
    let client = client()?;

    match action {
        EmployeeAction::Create {
            name,
            age,
            address,
            employee_id,
            salary,
        } => {
            let employee = client
                .create_employee(&CreateEmployeeRequest {
                    name: &name,
                    age,
                    address: &address,
                    employee_id: &employee_id,
                    salary,
                })
                .await?;

            println!(
                "{} Employee {} [{}] created (id {})",
                "✓".green(),
                employee.name.cyan(),
                employee.employee_id,
                display_id(employee.id)
            );
        }

        EmployeeAction::Get { id } => {
            let employee = client.get_employee(id).await?;
            println!(
                "  {} {} ({}) [{}] salary {:.2}",
                display_id(employee.id).dimmed(),
                employee.name.cyan().bold(),
                employee.age,
                employee.employee_id,
                employee.salary
            );
        }
    }

    Ok(())
}

async fn cmd_config(action: Option<ConfigAction>) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        Some(ConfigAction::SetUrl { url }) => {
            config.set_base_url(&url)?;

            let client = SolidClient::new(&config.base_url);
            print!("Testing connection... ");
            match client.health().await {
                Ok(true) => println!("{}", "OK".green()),
                _ => println!("{}", "unreachable (saved anyway)".yellow()),
            }

            config.save()?;
            println!(
                "{} Base URL saved to {:?}",
                "✓".green(),
                Config::config_path().context("Could not resolve config path")?
            );
        }

        None => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Base URL: {}", config.base_url);
        }
    }

    Ok(())
}

fn display_id(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}
