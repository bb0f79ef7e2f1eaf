// SPDX-License-Identifier: MPL-2.0
use portal_client::api::{ApiError, CookieJar};
use portal_client::app::{config, paths, ApiPanel, AppContext, LocalStorage};
use portal_client::error::{Error, Result};
use portal_client::infrastructure::ReqwestTransport;
use portal_client::logging;
use portal_client::ui::theming;
use serde_json::Value;
use std::process::ExitCode;
use tracing::{info, warn};

const HELP: &str = "\
portal_client

USAGE:
  portal_client [OPTIONS] <COMMAND>

COMMANDS:
  get <endpoint> [key=value ...]     GET with query parameters
  post <endpoint> [json]             POST a JSON body
  put <endpoint> [json]              PUT a JSON body
  patch <endpoint> [json]            PATCH a JSON body
  delete <endpoint>                  DELETE
  stats                              Load dashboard statistics
  profile <json>                     Update the user profile
  contact <json>                     Submit the contact form
  theme [toggle]                     Show or toggle the stored theme

OPTIONS:
  --origin <url>        Backend origin (overrides settings.toml)
  --cookie <cookies>    Session cookies, `name=value; name=value`
  --config-dir <dir>    Configuration directory
  --data-dir <dir>      Data directory (local storage)
  -v, -vv, -vvv         More log output (repeatable, e.g. `-v -v`)
  -h, --help            Print this help
";

struct Args {
    origin: Option<String>,
    cookie: Option<String>,
    config_dir: Option<String>,
    data_dir: Option<String>,
    verbosity: u8,
    command: Vec<String>,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let verbosity = count_verbosity(&mut pargs);

    let args = Args {
        origin: pargs.opt_value_from_str("--origin")?,
        cookie: pargs.opt_value_from_str("--cookie")?,
        config_dir: pargs.opt_value_from_str("--config-dir")?,
        data_dir: pargs.opt_value_from_str("--data-dir")?,
        verbosity,
        command: pargs
            .finish()
            .into_iter()
            .filter_map(|arg| arg.into_string().ok())
            .collect(),
    };
    Ok(Some(args))
}

/// Sums `-v`, `-vv` and `-vvv` flags; pico-args does not split short flags.
fn count_verbosity(pargs: &mut pico_args::Arguments) -> u8 {
    let mut verbosity = 0u8;
    for (flag, level) in [("-vvv", 3u8), ("-vv", 2), ("-v", 1)] {
        while pargs.contains(flag) {
            verbosity = verbosity.saturating_add(level);
        }
    }
    verbosity
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    logging::init(args.verbosity);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Usage(message)) => {
            eprintln!("{message}\n\n{HELP}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    paths::init_cli_overrides(args.data_dir, args.config_dir);

    let (mut config, warning) = config::load();
    if let Some(warning) = warning {
        warn!("{warning}");
    }
    if let Some(origin) = args.origin {
        config.api.origin = origin;
    }
    if let Some(cookie) = args.cookie {
        config.api.cookie = Some(cookie);
    }

    let (storage, warning) = LocalStorage::load();
    if let Some(warning) = warning {
        warn!("{warning}");
    }

    let cookies = CookieJar::parse(config.api.cookie.as_deref().unwrap_or_default());
    let transport = ReqwestTransport::new(&config.api.origin, &cookies).map_err(ApiError::from)?;
    info!(origin = %transport.origin(), "portal client ready");

    let mut ctx = AppContext::new(
        &config,
        transport,
        storage,
        theming::detect_system_preference(),
    );

    let mut words = args.command.into_iter();
    let command = words
        .next()
        .ok_or_else(|| Error::Usage("missing command".to_string()))?;
    let rest: Vec<String> = words.collect();

    match command.as_str() {
        "get" => {
            let (endpoint, pairs) = split_endpoint(&rest)?;
            let params = pairs
                .iter()
                .map(|pair| {
                    pair.split_once('=').ok_or_else(|| {
                        Error::Usage(format!("query parameter `{pair}` is not key=value"))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            print_json(&ctx.api.get(endpoint, params).await?)
        }
        "post" | "put" | "patch" => {
            let (endpoint, body) = split_endpoint(&rest)?;
            let body = body.first().map(|raw| parse_body(raw)).transpose()?;
            let value = match command.as_str() {
                "post" => ctx.api.post(endpoint, body.as_ref()).await?,
                "put" => ctx.api.put(endpoint, body.as_ref()).await?,
                _ => ctx.api.patch(endpoint, body.as_ref()).await?,
            };
            print_json(&value)
        }
        "delete" => {
            let (endpoint, _) = split_endpoint(&rest)?;
            print_json(&ctx.api.delete(endpoint).await?)
        }
        "stats" => {
            let mut panel = ApiPanel::new();
            panel.init(&ctx.api).await;
            match (panel.stats(), panel.error()) {
                (_, Some(err)) => Err(Error::Api(err.clone())),
                (Some(stats), None) => print_json(stats),
                (None, None) => Ok(()),
            }
        }
        "profile" | "contact" => {
            let raw = rest
                .first()
                .ok_or_else(|| Error::Usage(format!("`{command}` needs a JSON body")))?;
            let body = parse_body(raw)?;
            let panel = ApiPanel::new();
            let result = if command == "profile" {
                panel.update_profile(&ctx.api, &ctx.notifications, &body).await
            } else {
                panel.submit_contact(&ctx.api, &ctx.notifications, &body).await
            };
            print_notifications(&ctx);
            result.map(|_| ()).map_err(Error::from)
        }
        "theme" => {
            match rest.first().map(String::as_str) {
                None => {}
                Some("toggle") => ctx.toggle_theme(),
                Some(other) => return Err(Error::Usage(format!("unknown theme action `{other}`"))),
            }
            println!("{}", ctx.theme.mode().as_str());
            Ok(())
        }
        other => Err(Error::Usage(format!("unknown command `{other}`"))),
    }
}

fn split_endpoint(rest: &[String]) -> Result<(&str, &[String])> {
    match rest.split_first() {
        Some((endpoint, tail)) => Ok((endpoint.as_str(), tail)),
        None => Err(Error::Usage("missing endpoint".to_string())),
    }
}

fn parse_body(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|e| Error::Usage(format!("invalid JSON body: {e}")))
}

fn print_json(value: &Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(ApiError::from)?;
    println!("{rendered}");
    Ok(())
}

fn print_notifications<T>(ctx: &AppContext<T>) {
    for notification in ctx.notifications.items() {
        println!("[{}] {}", notification.kind().as_str(), notification.message());
    }
}
