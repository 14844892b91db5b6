use basic_auth::{config::Config, error::Error, Credentials};

use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the Authorization header value for a userid and password
    Encode {
        name: String,
        #[arg(default_value = "")]
        pass: String,
        /// Keep the ':' separator even when the password is empty
        #[arg(long)]
        strict: bool,
    },
    /// Print the credentials carried by an Authorization header value
    Decode {
        header: String,
        #[arg(long)]
        json: bool,
    },
    /// Check an Authorization header value against configured credentials
    Check {
        #[arg(default_value = "")]
        header: String,
        #[arg(long, default_value = "config.toml")]
        config: String,
        /// Overrides the realm from the config file
        #[arg(long)]
        realm: Option<String>,
        /// Request path, matched against the whitelist
        #[arg(long)]
        path: Option<String>,
    },
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let cli = Args::parse();
    log::debug!("{:?}", &cli.command);

    match &cli.command {
        Some(Commands::Encode { name, pass, strict }) => {
            let header = if *strict {
                basic_auth::format(&Credentials::new(name.as_str(), pass.as_str()))
            } else {
                basic_auth::encode(name, pass)
            };
            println!("{header}");
        }
        Some(Commands::Decode { header, json }) => {
            let Some(credentials) = basic_auth::parse_header(header) else {
                return Err(Error::NoCredentials);
            };

            if *json {
                println!("{}", serde_json::to_string(&credentials)?);
            } else {
                println!("name: {}", credentials.name());
                println!("pass: {}", credentials.pass());
            }
        }
        Some(Commands::Check { header, config, realm, path }) => {
            let mut config = Config::read_from_toml_file(config)?;
            if let Some(realm) = realm {
                config.realm = realm.clone();
            }

            match config.check(path.as_deref(), header) {
                Ok(()) => println!("ok"),
                Err(Error::Unauthorized(challenge)) => {
                    println!("WWW-Authenticate: {challenge}");
                    return Err(Error::Unauthorized(challenge));
                }
                Err(e) => return Err(e),
            }
        }
        _ => {
            Args::command().print_help()?;
        }
    }

    Ok(())
}
