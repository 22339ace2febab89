use anyhow::{bail, Context, Result};
use autobeamer::config::{parse_columns, resolve_template_dir, RunConfig, DEFAULT_OUTPUT_DIR};
use autobeamer::{BeamerRenderer, LoadedOutline, OutlineLoader, RenderConfig, TemplateDir};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("autobeamer")
        .about("Convert outline documents to LaTeX-beamer presentations")
        .arg(
            Arg::new("inputs")
                .help("Outline JSON files to convert")
                .required(true)
                .num_args(1..)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Directory receiving the generated .tex files")
                .default_value(DEFAULT_OUTPUT_DIR)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .help("Output file name without extension (single input only)"),
        )
        .arg(
            Arg::new("two-level-sections")
                .short('s')
                .long("two-level-sections")
                .help("Emit \\subsection for second-level outline entries")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("columns")
                .short('c')
                .long("columns")
                .help("Frame layout: 1 or 2 columns")
                .default_value("1")
                .value_parser(parse_columns),
        )
        .arg(
            Arg::new("templates")
                .short('t')
                .long("templates")
                .help("Directory containing front.tex and back.tex")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the generated document instead of writing files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v, -vv, -vvv)")
                .action(ArgAction::Count),
        )
}

fn setup_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_config(matches: &ArgMatches) -> RunConfig {
    let template_arg = matches.get_one::<PathBuf>("templates");

    RunConfig {
        render: RenderConfig::new(
            matches.get_flag("two-level-sections"),
            matches.get_one::<bool>("columns").copied().unwrap_or(false),
        ),
        template_dir: resolve_template_dir(template_arg.map(PathBuf::as_path)),
        output_dir: matches
            .get_one::<PathBuf>("output-dir")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        output_name: matches.get_one::<String>("name").cloned(),
        to_stdout: matches.get_flag("stdout"),
    }
}

fn convert(
    renderer: &BeamerRenderer<TemplateDir>,
    outline: &LoadedOutline,
    config: &RunConfig,
) -> Result<()> {
    info!("generating latex-beamer presentation from: {}", outline.name);

    let document = renderer
        .render_document(&outline.root)
        .with_context(|| format!("Failed to render {}", outline.name))?;

    if config.to_stdout {
        let stdout = io::stdout();
        document.write_to(&mut stdout.lock())?;
        return Ok(());
    }

    let path = config.output_path(&outline.name);
    document
        .write_file(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("beamer file is outputted to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    setup_logging(matches.get_count("verbose"));

    let inputs: Vec<PathBuf> = matches
        .get_many::<PathBuf>("inputs")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let config = run_config(&matches);

    if config.output_name.is_some() && inputs.len() > 1 {
        bail!("--name can only be used with a single input file");
    }

    let outlines = OutlineLoader.load_all(&inputs)?;
    info!("{} files have been loaded", outlines.len());

    if !config.to_stdout {
        fs::create_dir_all(&config.output_dir).with_context(|| {
            format!("Failed to create output directory {}", config.output_dir.display())
        })?;
    }

    let renderer = BeamerRenderer::new(config.render, TemplateDir::new(&config.template_dir));
    for outline in &outlines {
        convert(&renderer, outline, &config)?;
    }

    Ok(())
}
