//! Command-line shell.
//!
//! Subcommands mirror the flows the web client exposed. Identity is
//! resolved fresh on every invocation: another process may have logged in
//! or out since the last command, and resolution is idempotent.

use clap::{Parser, Subcommand};
use dialoguer::{Input, Password, Select};
use tracing::debug;

use mindmeter_auth::resolve_identity;
use mindmeter_config::SessionConfig;
use mindmeter_core::Error;
use mindmeter_core::pagination::PageParams;

use crate::client::ApiClient;
use crate::modules::admin::model::UserFilter;
use crate::modules::admin::service::AdminService;
use crate::modules::advice::model::AskAdviceRequest;
use crate::modules::advice::service::AdviceService;
use crate::modules::auth::model::{LoginRequest, RegisterRequest};
use crate::modules::auth::service::AuthService;
use crate::modules::contact::model::ContactRequest;
use crate::modules::contact::service::ContactService;
use crate::modules::depression_test::model::SubmitAnswersRequest;
use crate::modules::depression_test::service::DepressionTestService;
use crate::routing::{RouteDecision, RouteGate};

#[derive(Parser)]
#[command(name = "mindmeter")]
#[command(about = "MindMeter - mental-health self-assessment client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in with email and password
    Login {
        /// Email address (prompted if not provided)
        #[arg(short = 'e', long)]
        email: Option<String>,
    },
    /// Create an account
    Register {
        /// First name
        #[arg(short = 'f', long)]
        first_name: Option<String>,

        /// Last name
        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,
    },
    /// Start an anonymous guest session
    Guest,
    /// Log out and clear the stored session
    Logout,
    /// Show the current identity
    Whoami,
    /// Show the route-gate decision for a path
    Open {
        /// Path to navigate to (e.g. /admin/users)
        path: String,
    },
    /// Self-assessment tests
    Tests {
        #[command(subcommand)]
        command: TestsCommands,
    },
    /// Public advice questions and answers
    Advice {
        #[command(subcommand)]
        command: AdviceCommands,
    },
    /// Send a message to the platform team
    Contact,
    /// Show or set the UI theme preference
    Theme {
        /// Theme to set (omit to show the current one)
        value: Option<String>,
    },
    /// Platform administration (admin accounts only)
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand)]
pub enum TestsCommands {
    /// List available tests
    List,
    /// Take a test interactively
    Take {
        /// Test type (e.g. PHQ-9, GAD-7)
        test_type: String,
    },
}

#[derive(Subcommand)]
pub enum AdviceCommands {
    /// List published answers
    List,
    /// Ask a question
    Ask {
        /// The question (prompted if not provided)
        question: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// List user accounts
    Users {
        /// Page number
        #[arg(short = 'p', long, default_value = "1")]
        page: i64,

        /// Search term
        #[arg(short = 's', long)]
        search: Option<String>,
    },
    /// Platform statistics
    Stats,
}

/// Dispatches a parsed command.
pub async fn run(cli: Cli, client: ApiClient, config: SessionConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::Login { email } => login(&client, email).await,
        Commands::Register {
            first_name,
            last_name,
            email,
        } => register(&client, first_name, last_name, email).await,
        Commands::Guest => guest(&client).await,
        Commands::Logout => {
            AuthService::logout(&client).await;
            println!("👋 Logged out");
            Ok(())
        }
        Commands::Whoami => whoami(&client),
        Commands::Open { path } => open(&client, &path),
        Commands::Tests { command } => match command {
            TestsCommands::List => list_tests(&client).await,
            TestsCommands::Take { test_type } => take_test(&client, &test_type).await,
        },
        Commands::Advice { command } => match command {
            AdviceCommands::List => list_advice(&client).await,
            AdviceCommands::Ask { question } => ask_advice(&client, question).await,
        },
        Commands::Contact => contact(&client, &config).await,
        Commands::Theme { value } => theme(&client, value),
        Commands::Admin { command } => match command {
            AdminCommands::Users { page, search } => admin_users(&client, page, search).await,
            AdminCommands::Stats => admin_stats(&client).await,
        },
    }
}

async fn login(client: &ApiClient, email: Option<String>) -> anyhow::Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    let identity = AuthService::login(client, LoginRequest { email, password }).await?;
    println!("✅ Logged in as {} ({})", identity.name, identity.role);
    Ok(())
}

async fn register(
    client: &ApiClient,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
) -> anyhow::Result<()> {
    let first_name = match first_name {
        Some(v) => v,
        None => Input::new().with_prompt("First name").interact_text()?,
    };
    let last_name = match last_name {
        Some(v) => v,
        None => Input::new().with_prompt("Last name").interact_text()?,
    };
    let email = match email {
        Some(v) => v,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords don't match")
        .interact()?;

    let response = AuthService::register(
        client,
        RegisterRequest {
            first_name,
            last_name,
            email,
            password,
        },
    )
    .await?;
    println!("✅ {}", response.message);
    Ok(())
}

async fn guest(client: &ApiClient) -> anyhow::Result<()> {
    let identity = AuthService::start_anonymous(client).await?;
    println!("✅ Anonymous session started as {}", identity.name);
    println!("   Test results in this session stay on this device's session file.");
    Ok(())
}

fn whoami(client: &ApiClient) -> anyhow::Result<()> {
    match resolve_identity(client.session()) {
        Some(identity) => {
            println!("👤 {}", identity.name);
            if let Some(email) = &identity.email {
                println!("   Email: {}", email);
            }
            println!(
                "   Role: {}{}",
                identity.role,
                if identity.anonymous { " (anonymous)" } else { "" }
            );
        }
        None => println!("Not signed in. Run `mindmeter login` or `mindmeter guest`."),
    }
    Ok(())
}

fn open(client: &ApiClient, path: &str) -> anyhow::Result<()> {
    let gate = RouteGate::new(client.session().clone());
    match gate.navigate(path) {
        RouteDecision::Stay => println!("✅ {} is served ({:?} subtree)", path, gate.state()),
        RouteDecision::Replace(to) => println!("↪ {} redirects to {}", path, to),
    }
    Ok(())
}

async fn list_tests(client: &ApiClient) -> anyhow::Result<()> {
    let tests = DepressionTestService::list(client).await?;
    if tests.is_empty() {
        println!("No tests available.");
        return Ok(());
    }
    for test in tests {
        println!(
            "📋 {} - {} ({} questions)",
            test.test_type, test.name, test.question_count
        );
        if let Some(description) = test.description {
            println!("   {}", description);
        }
    }
    Ok(())
}

async fn take_test(client: &ApiClient, test_type: &str) -> anyhow::Result<()> {
    let Some(identity) = resolve_identity(client.session()) else {
        // Mirrors the pre-login "take test" flow: remember the choice, let
        // the route gate redirect once a session exists.
        client.session().set_pending_test(test_type);
        println!(
            "📝 No session yet. Saved {} to take after `mindmeter login` or `mindmeter guest`.",
            test_type
        );
        return Ok(());
    };

    let test = DepressionTestService::get(client, test_type).await?;
    println!("📋 {} — answering as {}", test.name, identity.name);

    let mut answers = Vec::with_capacity(test.questions.len());
    for (i, question) in test.questions.iter().enumerate() {
        let labels: Vec<&str> = question.options.iter().map(|o| o.label.as_str()).collect();
        let choice = Select::new()
            .with_prompt(format!("{}. {}", i + 1, question.text))
            .items(&labels)
            .default(0)
            .interact()?;
        answers.push(question.options[choice].value);
    }

    let result = DepressionTestService::submit(
        client,
        SubmitAnswersRequest {
            test_type: test.test_type,
            answers,
        },
    )
    .await?;

    println!("✅ Score: {} ({})", result.score, result.severity);
    if let Some(advice) = result.advice {
        println!("   {}", advice);
    }
    Ok(())
}

async fn list_advice(client: &ApiClient) -> anyhow::Result<()> {
    let answers = AdviceService::list(client).await?;
    if answers.is_empty() {
        println!("No published answers yet.");
        return Ok(());
    }
    for entry in answers {
        println!("❓ {}", entry.question);
        match entry.expert_name {
            Some(expert) => println!("💬 {} — {}", entry.answer, expert),
            None => println!("💬 {}", entry.answer),
        }
        println!();
    }
    Ok(())
}

async fn ask_advice(client: &ApiClient, question: Option<String>) -> anyhow::Result<()> {
    let question = match question {
        Some(q) => q,
        None => Input::new().with_prompt("Your question").interact_text()?,
    };

    let response = AdviceService::ask(client, AskAdviceRequest { question }).await?;
    println!("✅ {}", response.message);
    Ok(())
}

async fn contact(client: &ApiClient, config: &SessionConfig) -> anyhow::Result<()> {
    let name = Input::new().with_prompt("Name").interact_text()?;
    let email = Input::new().with_prompt("Email").interact_text()?;
    let message = Input::new().with_prompt("Message").interact_text()?;

    match ContactService::send(
        client,
        config.contact_cooldown_secs,
        ContactRequest {
            name,
            email,
            message,
        },
    )
    .await
    {
        Ok(response) => println!("✅ {}", response.message),
        Err(Error::Cooldown { remaining_secs }) => {
            println!("⏳ Please wait {}s before sending another message.", remaining_secs);
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn theme(client: &ApiClient, value: Option<String>) -> anyhow::Result<()> {
    match value {
        Some(value) => {
            client.session().set_theme(&value);
            println!("✅ Theme set to {}", value);
        }
        None => match client.session().theme() {
            Some(current) => println!("Theme: {}", current),
            None => println!("Theme: default"),
        },
    }
    Ok(())
}

async fn admin_users(client: &ApiClient, page: i64, search: Option<String>) -> anyhow::Result<()> {
    let filter = UserFilter {
        search,
        ..Default::default()
    };
    let users =
        AdminService::list_users(client, PageParams::new(page, 20), &filter).await?;

    debug!(total = users.meta.total, "Fetched user page");
    for user in &users.data {
        println!(
            "{} {} <{}> [{}]{}",
            user.id,
            user.full_name.as_deref().unwrap_or("-"),
            user.email.as_deref().unwrap_or("-"),
            user.role,
            if user.active { "" } else { " (deactivated)" }
        );
    }
    println!(
        "Page {} of {} users total",
        users.meta.page, users.meta.total
    );
    Ok(())
}

async fn admin_stats(client: &ApiClient) -> anyhow::Result<()> {
    let stats = AdminService::statistics(client).await?;
    println!("👥 Users: {}", stats.total_users);
    println!("📋 Tests taken: {}", stats.total_tests_taken);
    println!("🧑‍⚕️ Active experts: {}", stats.active_experts);
    for entry in &stats.tests_by_type {
        println!("   {}: {}", entry.test_type, entry.count);
    }
    Ok(())
}
