use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use cold_room_heat_load::{
    app::{self, AppContext, AppError},
    config,
    conversion,
    params::Section,
    report::{self, ReportFormat},
    store, ui_cli,
};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "cold_room_heat_load_cli")]
#[command(about = "Cold room refrigeration heat load calculator", long_about = None)]
struct Cli {
    /// UI language: auto, en, ko
    #[arg(long, short = 'L', global = true)]
    lang: Option<String>,
    /// Settings file
    #[arg(long, global = true, default_value = config::CONFIG_FILE)]
    config: PathBuf,
    /// Parameter file (overrides the path in the settings file)
    #[arg(long, global = true)]
    params: Option<PathBuf>,
    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Interactive,
    /// Calculate and print results for the stored parameters
    Calc {
        #[arg(long, value_enum, default_value_t = CalcFormat::Text)]
        format: CalcFormat,
    },
    /// Write a report file
    Report {
        /// text, markdown or toml (defaults to the settings file)
        #[arg(long)]
        format: Option<String>,
        /// Output file (defaults to the report folder)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Set one parameter and save it
    Set {
        /// room, product or misc
        section: String,
        /// Field key, e.g. airChangeRate
        key: String,
        /// New value; non-numeric text is stored as 0
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// List fields and current values
    Fields {
        /// room, product or misc (all when omitted)
        section: Option<String>,
    },
    /// Write default settings and parameter files
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
    /// List product presets
    Products,
    /// Apply a product preset to the stored parameters
    Preset {
        /// Product code, e.g. apple
        code: String,
    },
    /// Convert a value between units
    Convert {
        /// temperature, temperature-diff, length, area, u-factor, load
        quantity: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },
}

/// `calc` 명령의 출력 형식
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CalcFormat {
    Text,
    Toml,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = try_run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    // 표준 출력은 결과 전용이므로 로그는 stderr로 보낸다.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Init { force } => cmd_init(&cli.config, cli.params, force),
        Commands::Products => {
            ui_cli::print_products();
            Ok(())
        }
        Commands::Convert {
            quantity,
            value,
            from,
            to,
        } => {
            let out = conversion::convert_named(&quantity, value, &from, &to)?;
            println!("{out} {to}");
            Ok(())
        }
        command => {
            let mut ctx = AppContext::load(cli.config, cli.lang.as_deref(), cli.params)?;
            tracing::debug!(
                params = %ctx.store.path().display(),
                lang = ctx.tr.language_code(),
                "context loaded"
            );
            run_with_context(&mut ctx, command)
        }
    }
}

fn run_with_context(ctx: &mut AppContext, command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Calc { format } => cmd_calc(ctx, format),
        Commands::Report { format, output } => cmd_report(ctx, format.as_deref(), output),
        Commands::Set {
            section,
            key,
            value,
        } => {
            let section: Section = section.parse()?;
            let stored = ctx.store.update_field(section, &key, &value)?;
            println!("{section}.{key} = {stored}");
            ui_cli::print_summary(&ctx.tr, &ctx.store.results());
            Ok(())
        }
        Commands::Fields { section } => {
            let sections = match section {
                Some(s) => vec![s.parse::<Section>()?],
                None => Section::ALL.to_vec(),
            };
            for section in sections {
                ui_cli::print_fields(&ctx.tr, section, &ctx.store.params().views(section));
            }
            Ok(())
        }
        Commands::Preset { code } => {
            ctx.store.apply_product_preset(&code)?;
            println!("{}", ctx.store.params().product.product_name);
            ui_cli::print_summary(&ctx.tr, &ctx.store.results());
            Ok(())
        }
        _ => app::run(ctx),
    }
}

fn cmd_calc(ctx: &AppContext, format: CalcFormat) -> Result<(), AppError> {
    let results = ctx.store.results();
    match format {
        CalcFormat::Toml => {
            let text = toml::to_string_pretty(&results).map_err(report::ReportError::from)?;
            print!("{text}");
        }
        CalcFormat::Text => {
            let data = report::build_report(&results, &ctx.tr);
            println!("{}", report::render(&data, ReportFormat::Text)?);
        }
    }
    Ok(())
}

fn cmd_report(
    ctx: &AppContext,
    format: Option<&str>,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    let format = match format {
        Some(f) => ReportFormat::parse(f)?,
        None => ctx.config.report.format,
    };
    let data = report::build_report(&ctx.store.results(), &ctx.tr);
    let path = match output {
        Some(path) => {
            report::export_to(&data, format, &path)?;
            path
        }
        None => report::generate_and_share(&data, format, &ctx.config.report_dir())?,
    };
    println!("{}", path.display());
    Ok(())
}

fn cmd_init(config_path: &Path, params: Option<PathBuf>, force: bool) -> Result<(), AppError> {
    let cfg = if config_path.exists() && !force {
        config::load_from(config_path)?
    } else {
        let cfg = config::Config::default();
        cfg.save_to(config_path)?;
        println!("{}", config_path.display());
        cfg
    };
    let params_path = params.unwrap_or_else(|| cfg.parameters_path());
    if !params_path.exists() || force {
        store::save_parameters(&params_path, &Default::default())?;
        println!("{}", params_path.display());
    }
    Ok(())
}
