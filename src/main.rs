use clap::Parser;
use portfolio_site::config::cli::Command;
use portfolio_site::config::toml_config::SiteConfig;
use portfolio_site::domain::ports::PortfolioApi;
use portfolio_site::domain::sample;
use portfolio_site::utils::error::ErrorCategory;
use portfolio_site::utils::logger::{self, LogFormat};
use portfolio_site::{
    ApiClient, CategoryFilter, CliConfig, ContactForm, Field, PortfolioError, ProjectCatalog,
};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 設定檔只讀一次，日誌與 API 設定共用
    let site = config.load_site_config();
    let (verbose, json_logs) = match &site {
        Ok(Some(site)) => (config.verbose || site.verbose(), config.json_logs || site.json_logs()),
        _ => (config.verbose, config.json_logs),
    };

    // 初始化日誌
    logger::init_logger(LogFormat::from_json_flag(json_logs), verbose);

    if verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let result = match site {
        Ok(site) => run(config, site).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_message());
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(e: &PortfolioError) -> i32 {
    match e.category() {
        ErrorCategory::Validation | ErrorCategory::Configuration | ErrorCategory::Client => 1,
        ErrorCategory::Network => 2,
        ErrorCategory::Server => 3,
    }
}

fn print_profile() {
    let profile = sample::profile();
    println!("{}", profile.name);
    println!("{}", profile.title);
    println!("📍 {}", profile.location);
    println!("✉️  {}", profile.email);
    println!("🔗 {}", profile.linkedin);
    println!();
    println!("{}", profile.bio);
}

async fn run(config: CliConfig, site: Option<SiteConfig>) -> portfolio_site::Result<()> {
    // 只在啟動時決定一次 base URL
    let api_config = config.resolve_api_config(site.as_ref());

    match config.command {
        Command::Profile => print_profile(),
        Command::Health => {
            let client = ApiClient::new(api_config?)?;
            let health = client.health_check().await?;
            match health.version {
                Some(version) => println!("✅ {} (v{})", health.message, version),
                None => println!("✅ {}", health.message),
            }
        }
        Command::Projects { category, json } => {
            let client = ApiClient::new(api_config?)?;
            let mut catalog = ProjectCatalog::new();
            let cancel = CancellationToken::new();

            let ctrl_c = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    ctrl_c.cancel();
                }
            });

            catalog.load(&client, &cancel).await?;

            if let Some(notice) = catalog.notice() {
                eprintln!("⚠️  {}", notice);
            }

            let filter = category
                .as_deref()
                .map(CategoryFilter::from_label)
                .unwrap_or(CategoryFilter::All);
            let projects = catalog.filter(&filter);

            if json {
                println!("{}", serde_json::to_string_pretty(&projects)?);
            } else {
                for project in projects {
                    println!(
                        "[{}] {} ({}) - {}",
                        project.id,
                        project.title,
                        project.category,
                        project.technologies.join(", ")
                    );
                }
            }
        }
        Command::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let client = ApiClient::new(api_config?)?;
            let mut form = ContactForm::new(client);
            form.set_field(Field::Name, name);
            form.set_field(Field::Email, email);
            form.set_field(Field::Subject, subject);
            form.set_field(Field::Message, message);

            form.submit().await?;
            if let Some(success) = form.success_message() {
                println!("✅ {}", success);
            }
        }
    }

    Ok(())
}
