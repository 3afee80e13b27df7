use clap::{
    Parser,
    Subcommand,
};
use fleetac::{
    platform::Builder as PlatformBuilder,
    Platform,
};
use fleetcore::{
    ac::{
        agent::Agent,
        grant::Grant,
    },
    platform::ConnectorOption,
};
use fleetdb_sqlite::SqliteBackend;
use std::time::Instant;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(long, value_name = "FLEETAC_DB_URL", env = "FLEETAC_DB_URL")]
    fleetac_db_url: String,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(arg_required_else_help = true)]
    Principal {
        #[command(subcommand)]
        cmd: PrincipalCmd,
    },
    #[command(arg_required_else_help = true)]
    Role {
        #[command(subcommand)]
        cmd: RoleCmd,
    },
    #[command(arg_required_else_help = true)]
    Grant {
        #[command(subcommand)]
        cmd: GrantCmd,
    },
    /// Resolve the page permissions for a principal, or for the
    /// anonymous agent if no id is given
    Resolve {
        id: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum PrincipalCmd {
    #[command(arg_required_else_help = true)]
    Create {
        id: String,
        /// Display name; defaults to the id
        name: Option<String>,
    },
    #[command(arg_required_else_help = true)]
    SuperAdmin {
        id: String,
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Issue a new bearer token
    #[command(arg_required_else_help = true)]
    Token {
        id: String,
    },
    #[command(arg_required_else_help = true)]
    Status {
        id: String,
    },
}

#[derive(Debug, Subcommand)]
enum RoleCmd {
    #[command(arg_required_else_help = true)]
    Grant {
        id: String,
        role: String,
    },
    #[command(arg_required_else_help = true)]
    Revoke {
        id: String,
        role: String,
    },
}

#[derive(Debug, Subcommand)]
enum GrantCmd {
    /// Set the permission flags a role has on a page
    #[command(arg_required_else_help = true)]
    Set {
        role: String,
        page_key: String,
        #[arg(long)]
        view: bool,
        #[arg(long)]
        edit: bool,
    },
    #[command(arg_required_else_help = true)]
    Remove {
        role: String,
        page_key: String,
    },
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("fleetac")
        .module("fleetrbac")
        .module("fleetdb_sqlite")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let platform = PlatformBuilder::new()
        .ac_platform(
            SqliteBackend::ac(
                ConnectorOption::from(args.fleetac_db_url)
                    .create_db(true)
            ).await?
        )
        .build()?;

    match args.command {
        Commands::Principal { cmd } => {
            parse_principal(&platform, cmd).await?;
        },
        Commands::Role { cmd } => {
            parse_role(&platform, cmd).await?;
        },
        Commands::Grant { cmd } => {
            parse_grant(&platform, cmd).await?;
        },
        Commands::Resolve { id } => {
            resolve(&platform, id).await?;
        },
    }

    Ok(())
}

async fn parse_principal<'p>(
    platform: &'p Platform,
    arg: PrincipalCmd,
) -> anyhow::Result<()> {
    match arg {
        PrincipalCmd::Create { id, name } => {
            let name = name.unwrap_or_else(|| id.clone());
            let principal = platform.create_principal(&id, &name).await?;
            println!("principal {:?} created with id {}", principal.name, principal.id);
        }
        PrincipalCmd::SuperAdmin { id, value } => {
            platform.set_super_admin(&id, value).await?;
            println!("super admin for {id} set to {value}");
        }
        PrincipalCmd::Token { id } => {
            let token = platform.issue_token(&id).await?;
            println!("{token}");
        }
        PrincipalCmd::Status { id } => {
            let principal = platform.get_principal(&id).await?;
            println!("id: {}", principal.id);
            println!("name: {}", principal.name);
            println!("created_ts: {}", principal.created_ts);
            println!("super_admin: {}", platform.is_super_admin(&id).await?);
            let roles = platform.roles_of(&id).await?
                .iter()
                .map(|role| role.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            println!("roles: [{roles}]");
        }
    }
    Ok(())
}

async fn parse_role<'p>(
    platform: &'p Platform,
    arg: RoleCmd,
) -> anyhow::Result<()> {
    match arg {
        RoleCmd::Grant { id, role } => {
            if platform.grant_role_to_principal(&id, &role).await? {
                println!("role {role} granted to {id}");
            } else {
                println!("role {role} was already granted to {id}");
            }
        }
        RoleCmd::Revoke { id, role } => {
            if platform.revoke_role_from_principal(&id, &role).await? {
                println!("role {role} revoked from {id}");
            } else {
                println!("{id} has no role {role} to be revoked");
            }
        }
    }
    Ok(())
}

async fn parse_grant<'p>(
    platform: &'p Platform,
    arg: GrantCmd,
) -> anyhow::Result<()> {
    match arg {
        GrantCmd::Set { role, page_key, view, edit } => {
            let grant = platform.set_grant(Grant::new(role, page_key, view, edit)).await?;
            println!(
                "role {} on page {}: view={} edit={}",
                grant.role,
                grant.page_key,
                grant.can_view,
                grant.can_edit,
            );
        }
        GrantCmd::Remove { role, page_key } => {
            if platform.remove_grant(&role, &page_key).await? {
                println!("removed grant for role {role} on page {page_key}");
            } else {
                println!("role {role} has no grant on page {page_key}");
            }
        }
        GrantCmd::List => {
            for grant in platform.list_grants().await?.into_iter() {
                let unknown = if grant.page().is_none() {
                    " (unknown page; ignored)"
                } else {
                    ""
                };
                println!(
                    "{}\t{}\tview={}\tedit={}{unknown}",
                    grant.role,
                    grant.page_key,
                    grant.can_view,
                    grant.can_edit,
                );
            }
        }
    }
    Ok(())
}

async fn resolve<'p>(
    platform: &'p Platform,
    id: Option<String>,
) -> anyhow::Result<()> {
    let agent: Agent = match id {
        Some(id) => platform.get_principal(&id).await?.into(),
        None => Agent::Anonymous,
    };
    let instant = Instant::now();
    let permissions = platform.resolve_agent(&agent).await?;
    let elapsed = instant.elapsed();
    println!("{}", serde_json::to_string_pretty(&permissions)?);
    println!("resolved permissions for {agent} in {elapsed:?}");
    Ok(())
}
