//! Command-line interface for HierarchyNode generation

use clap::{Parser, Subcommand, ValueEnum};
use hierarchy_node_core::{HierarchyNodeError, HierarchyNodeResult, SceneSnapshot};
use hierarchy_node_generator::{
    support_scripts, GeneratedHierarchyNode, GeneratorConfig, HierarchyNodeGenerator, NodeInfo,
    ScriptWriter,
};
use log::info;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

mod selection;
use selection::{select_objects, SelectionArgs};

#[derive(Parser)]
#[command(name = "hierarchy-node")]
#[command(about = "Generate typed C# node classes from Unity scene hierarchies")]
#[command(version)]
#[command(long_about = "Reads a scene snapshot and generates one C# wrapper class per GameObject in the selected hierarchies, with cached accessors for components and children")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable quiet mode (suppress non-error output)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Set log level
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    /// Configuration file (defaults to ./hierarchy-node.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate node scripts for the selected objects
    Generate {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Also generate the {Name}NodeComponent behaviour
        #[arg(long)]
        with_component: bool,
        /// Output directory (overrides the configured one)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print scripts to stdout instead of writing files
        #[arg(long)]
        stdout: bool,
    },
    /// Write the runtime support library (NodeBase.cs, NodeChildrenBase.cs)
    Support {
        /// Output directory (defaults to the parent of the generated scripts directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the node tree that would be generated
    Inspect {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Clone, Debug)]
enum OutputFormat {
    Human,
    Json,
}

fn main() -> HierarchyNodeResult<()> {
    let cli = Cli::parse();

    init_logging(&cli);
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate { selection, with_component, output, stdout } => {
            handle_generate_command(config, selection, with_component, output, stdout)
        }
        Commands::Support { output } => handle_support_command(config, output),
        Commands::Inspect { selection, format } => handle_inspect_command(config, selection, format),
    }
}

fn init_logging(cli: &Cli) {
    let log_level = if cli.quiet {
        log::LevelFilter::Error
    } else if cli.verbose {
        log::LevelFilter::Debug
    } else {
        match &cli.log_level {
            Some(LogLevel::Error) => log::LevelFilter::Error,
            Some(LogLevel::Warn) => log::LevelFilter::Warn,
            Some(LogLevel::Info) => log::LevelFilter::Info,
            Some(LogLevel::Debug) => log::LevelFilter::Debug,
            Some(LogLevel::Trace) => log::LevelFilter::Trace,
            None => log::LevelFilter::Info,
        }
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp_secs()
        .init();
}

fn load_config(path: Option<&Path>) -> HierarchyNodeResult<GeneratorConfig> {
    let config = match path {
        Some(path) => GeneratorConfig::from_file(path),
        None => GeneratorConfig::discover("."),
    };

    config.map_err(|e| HierarchyNodeError::configuration(e.to_string()))
}

fn handle_generate_command(
    mut config: GeneratorConfig,
    selection: SelectionArgs,
    with_component: bool,
    output: Option<PathBuf>,
    stdout: bool,
) -> HierarchyNodeResult<()> {
    if let Some(output) = output {
        config.output_directory = output;
        config.validate().map_err(|e| HierarchyNodeError::configuration_with_field(e.to_string(), "output"))?;
    }

    let snapshot = SceneSnapshot::from_file(&selection.snapshot)?;
    let selected = select_objects(&snapshot, &selection.select, selection.filter.as_deref())?;

    let generator = HierarchyNodeGenerator::new(config);
    let writer = ScriptWriter::new(generator.config().output_directory.clone());

    let mut written = Vec::new();
    for item in &selected {
        info!("Generating node script for '{}'", item.path);
        let generated = generator.generate(item.object);

        if stdout {
            print_scripts(&mut io::stdout().lock(), &generated, with_component)?;
        } else {
            written.extend(writer.write_generated(&generated, with_component)?);
        }
    }

    if !stdout {
        println!("✅ Generated {} script(s) for {} object(s)", written.len(), selected.len());
        println!("📁 Output directory: {}", writer.output_dir().display());
        info!("Refresh the Unity asset database to import the generated scripts");
    }

    Ok(())
}

/// Print the generated scripts, each preceded by a `// {file}.cs` header line
fn print_scripts<W: Write>(
    out: &mut W,
    generated: &GeneratedHierarchyNode,
    with_component: bool,
) -> HierarchyNodeResult<()> {
    writeln!(out, "// {}", generated.script_file_name())?;
    write!(out, "{}", generated.script)?;
    if with_component {
        writeln!(out, "// {}", generated.component_script_file_name())?;
        write!(out, "{}", generated.component_script)?;
    }
    out.flush()?;
    Ok(())
}

fn handle_support_command(config: GeneratorConfig, output: Option<PathBuf>) -> HierarchyNodeResult<()> {
    let output = output.unwrap_or_else(|| {
        config
            .output_directory
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    });

    let writer = ScriptWriter::new(output);
    let written = writer.write_support(&support_scripts(&config))?;

    println!("✅ Wrote {} support script(s) to {}", written.len(), writer.output_dir().display());
    Ok(())
}

fn handle_inspect_command(
    config: GeneratorConfig,
    selection: SelectionArgs,
    format: OutputFormat,
) -> HierarchyNodeResult<()> {
    let snapshot = SceneSnapshot::from_file(&selection.snapshot)?;
    let selected = select_objects(&snapshot, &selection.select, selection.filter.as_deref())?;
    let generator = HierarchyNodeGenerator::new(config);

    let trees: Vec<NodeInfo> = selected.iter().map(|item| generator.node_info(item.object)).collect();

    match format {
        OutputFormat::Human => {
            for tree in &trees {
                print_node_tree(tree, 0);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&trees)?),
    }

    Ok(())
}

fn print_node_tree(node: &NodeInfo, depth: usize) {
    let mut line = format!("{}{:?} -> {}Node", "  ".repeat(depth), node.original_name, node.class_name);
    if !node.components.is_empty() {
        line.push_str(&format!(" [{}]", node.components.join(", ")));
    }
    println!("{}", line);

    for child in &node.child_nodes {
        print_node_tree(child, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hierarchy_node_core::SceneObject;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn door() -> GeneratedHierarchyNode {
        HierarchyNodeGenerator::default().generate(&SceneObject::new("Door"))
    }

    #[test]
    fn test_print_scripts_with_headers() {
        let generated = door();
        let mut out = Vec::new();
        print_scripts(&mut out, &generated, true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("// DoorNode.cs\nusing UnityEngine;\n"));
        assert!(text.contains("}\n// DoorNodeComponent.cs\nusing UnityEngine;\n"));
        assert!(text.ends_with(&generated.component_script));
    }

    #[test]
    fn test_print_scripts_without_component() {
        let mut out = Vec::new();
        print_scripts(&mut out, &door(), false).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains("DoorNodeComponent"));
    }

    #[test]
    fn test_print_scripts_reports_write_failure() {
        let result = print_scripts(&mut ClosedPipe, &door(), false);
        assert!(matches!(result, Err(HierarchyNodeError::Io(_))));
    }
}
