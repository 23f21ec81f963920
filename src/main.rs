//! casefile-rbac - query the role permission registry from a shell

use casefile_rbac::utils::logging::{bootstrap_subscriber, build_filter, init_logging};
use casefile_rbac::{
    Config, LoggingConfig, Permission, PermissionRegistry, Result, Role, build_info,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing::instrument::WithSubscriber;

#[derive(Debug, Parser)]
#[command(name = "casefile-rbac", version, about = "Inspect and query role permissions")]
struct Cli {
    /// YAML configuration file; environment variables override its values
    #[arg(long, global = true, env = "CASEFILE_RBAC_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check whether a role holds a permission
    Check {
        #[arg(long)]
        role: String,
        /// Permission in `resource:action` form
        #[arg(long)]
        permission: Permission,
    },
    /// Check whether a role may perform an action on a resource type
    Access {
        #[arg(long)]
        role: String,
        #[arg(long)]
        resource: String,
        #[arg(long)]
        action: String,
    },
    /// List the permissions a role holds
    Permissions {
        #[arg(long)]
        role: String,
    },
    /// List the known roles
    Roles,
    /// Print the effective grant table
    Table {
        #[arg(long, value_enum, default_value_t = Format::Yaml)]
        format: Format,
    },
    /// Print build information
    Version,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let bootstrap = bootstrap_subscriber(
        build_filter(&LoggingConfig::default())?,
        std::io::stderr,
    );
    let mut config = Config::load(cli.config.as_deref())
        .with_subscriber(bootstrap)
        .await?;
    if cli.json_logs {
        config.logging.json = true;
    }
    init_logging(config.logging())?;

    // `Config::load` has already validated the rbac section
    let registry = PermissionRegistry::new(config.rbac().grant_table())
        .with_unknown_permission_warnings(config.rbac().warn_on_unknown_permission);
    debug!("Running {:?}", cli.command);

    match cli.command {
        Command::Check { role, permission } => {
            Ok(verdict(registry.has_permission(&role, permission)))
        }
        Command::Access {
            role,
            resource,
            action,
        } => Ok(verdict(registry.can_access_resource(&role, &resource, &action))),
        Command::Permissions { role } => {
            let mut permissions: Vec<Permission> =
                registry.get_role_permissions(&role).into_iter().collect();
            permissions.sort();
            for permission in permissions {
                println!("{}", permission);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Roles => {
            for role in registry.list_roles() {
                println!("{}\t{}\t{}", role, role.rank(), role.description());
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Table { format } => {
            let rendered = match format {
                Format::Yaml => serde_yaml::to_string(registry.table())?,
                Format::Json => serde_json::to_string_pretty(registry.table())?,
            };
            println!("{}", rendered.trim_end());
            Ok(ExitCode::SUCCESS)
        }
        Command::Version => {
            let info = build_info();
            println!("{} {}", casefile_rbac::NAME, info.version);
            println!("commit: {}", info.git_hash);
            println!("built: {}", info.build_time);
            println!("rustc: {}", info.rust_version);
            println!("roles: {}", Role::all().len());
            println!("permissions: {}", Permission::all().len());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn verdict(granted: bool) -> ExitCode {
    if granted {
        println!("allow");
        ExitCode::SUCCESS
    } else {
        println!("deny");
        ExitCode::from(1)
    }
}
