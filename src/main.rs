use anyhow::Context;
use clap::{ArgAction, Parser};
use polyscribe::Config;
use polyscribe::draw::{Layer, Polyline, Scene, ShapeId, Surface};
use polyscribe::editor::Editor;
use polyscribe::script;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "polyscribe")]
#[command(version, about = "Interactive polyline editor with undo/redo")]
struct Cli {
    /// Event script to replay (reads stdin when omitted)
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Maximum points per polyline (overrides the config file)
    #[arg(long, value_name = "N")]
    max_points: Option<usize>,

    /// Load configuration from PATH instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print every state transition while replaying
    #[arg(long, action = ArgAction::SetTrue)]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(max_points) = cli.max_points {
        config.drawing.max_points = max_points;
        config.validate_and_clamp();
    }

    let (source, origin) = read_script(cli.script.as_ref())?;
    let steps = script::parse(&source).with_context(|| format!("Invalid script {}", origin))?;
    log::info!("Replaying {} steps from {}", steps.len(), origin);

    let mut editor =
        Editor::new(Scene::new(), &config).context("Invalid keybindings in configuration")?;
    if cli.trace {
        editor.set_observer(|transition| {
            println!(
                "{} --{}--> {}",
                transition.from, transition.signal, transition.to
            );
        });
    }

    for step in &steps {
        log::debug!("{}", step);
        step.apply(&mut editor);
    }

    let scene = editor.surface();
    for id in scene.shapes(Layer::Drawing) {
        if let Some(line) = scene.shape(id) {
            println!("{}", describe(id, line));
        }
    }
    println!("state: {}", editor.state());
    println!(
        "undo={} redo={}",
        editor.history().undo_count(),
        editor.history().redo_count()
    );

    Ok(())
}

fn read_script(path: Option<&PathBuf>) -> anyhow::Result<(String, String)> {
    match path {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script from {}", path.display()))?;
            Ok((source, path.display().to_string()))
        }
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read script from stdin")?;
            Ok((source, "<stdin>".to_string()))
        }
    }
}

fn describe(id: ShapeId, line: &Polyline) -> String {
    let points = line
        .points()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} color={} width={} points=[{}]",
        id,
        line.color.name(),
        line.width,
        points
    )
}
