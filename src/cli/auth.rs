//! Authentication commands: login, register, logout, status

use colored::Colorize;
use dialoguer::Password;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::RegisterRequest;
use crate::error::Result;

/// Prompt for a password unless one was passed as a flag
fn resolve_password(flag: Option<String>, prompt: &str) -> Result<String> {
    match flag {
        Some(password) => Ok(password),
        None => Ok(Password::new().with_prompt(prompt).interact()?),
    }
}

/// Sign in and persist the session
pub async fn login(ctx: &CommandContext, email: &str, password: Option<String>) -> Result<()> {
    let password = resolve_password(password, "Password")?;

    ctx.session.login(email, &password).await?;

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "data": { "logged_in": true, "email": email },
                "meta": {
                    "version": env!("CARGO_PKG_VERSION"),
                    "timestamp": chrono::Utc::now().to_rfc3339()
                }
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            eprintln!("{} Logged in as {}", "✓".green(), email.bold());
        }
    }

    Ok(())
}

/// Create a new account. Leaves the session untouched; follow with login.
pub async fn register(
    ctx: &CommandContext,
    email: &str,
    name: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let name: String = match name {
        Some(name) => name,
        None => dialoguer::Input::<String>::new()
            .with_prompt("Name")
            .interact_text()?,
    };
    let password = resolve_password(password, "Password")?;

    let request = RegisterRequest::new(email, &name, &password);
    ctx.session.register(&request).await?;

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "data": { "registered": true, "email": email },
                "meta": {
                    "version": env!("CARGO_PKG_VERSION"),
                    "timestamp": chrono::Utc::now().to_rfc3339()
                }
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            eprintln!("{} Account created for {}", "✓".green(), email.bold());
            eprintln!("→ Sign in: taskops login {}", email);
        }
    }

    Ok(())
}

/// Drop the stored session
pub async fn logout(ctx: &CommandContext) -> Result<()> {
    ctx.session.logout().await;
    eprintln!("{} Logged out", "✓".green());
    Ok(())
}

/// Show session and configuration status
pub async fn status(ctx: &CommandContext) -> Result<()> {
    println!("{}\n", "taskops Status".bold());

    println!(
        "Config file: {}",
        ctx.config_path.display().to_string().cyan()
    );
    println!("API URL: {}", ctx.api_url.cyan());
    println!();

    if ctx.session.is_authenticated().await {
        println!("{} Session stored", "✓".green());
        println!("  Tokens are trusted until the server rejects them.");
    } else {
        println!("{} Not logged in", "✗".red());
        println!("  → Run 'taskops login <EMAIL>' to sign in");
    }

    println!();
    Ok(())
}
