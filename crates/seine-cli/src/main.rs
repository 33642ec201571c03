use seine::{CostModel, EdgeColumns, Graph, ReliabilityOptions, VertexId};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Seine(seine::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Seine(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<seine::Error> for CliError {
    fn from(value: seine::Error) -> Self {
        Self::Seine(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Components,
    Cycles,
    Paths,
    Reliability,
}

#[derive(Debug, Clone, Copy)]
enum InputFormat {
    Edges(EdgeColumns),
    Coordinates,
}

impl Default for InputFormat {
    fn default() -> Self {
        Self::Edges(EdgeColumns::Bare)
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    format: InputFormat,
    cost: CostModel,
    source: Option<VertexId>,
    diameter: Option<f64>,
    terminals: Option<Vec<VertexId>>,
    max_subproblems: Option<u64>,
    pretty: bool,
}

#[derive(Serialize)]
struct ComponentsOut {
    vertices: usize,
    edges: usize,
    components: usize,
    connected: bool,
}

#[derive(Serialize)]
struct CyclesOut {
    vertices: usize,
    edges: usize,
    has_cycle: bool,
}

#[derive(Serialize)]
struct PathOut {
    distance: Option<f64>,
    path: Option<Vec<VertexId>>,
}

#[derive(Serialize)]
struct PathsOut {
    source: VertexId,
    paths: Vec<PathOut>,
}

#[derive(Serialize)]
struct ReliabilityOut {
    reliability: f64,
    terminals: Vec<VertexId>,
}

fn usage() -> &'static str {
    "seine-cli\n\
\n\
USAGE:\n\
  seine-cli [components] [--coords|--columns uv|uvw|uvr|uvrw] [<path>|-]\n\
  seine-cli cycles [--coords|--columns uv|uvw|uvr|uvrw] [<path>|-]\n\
  seine-cli paths --source <id> [--cost hops|weight] [--coords|--columns uv|uvw|uvr|uvrw] [--pretty] [<path>|-]\n\
  seine-cli reliability --diameter <x> [--terminals <id,id,...>] [--cost hops|weight] [--max-subproblems <n>] [--coords|--columns uv|uvw|uvr|uvrw] [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Edge-list columns: uv = 'u, v', uvw = 'u, v, weight', uvr = 'u, v, reliability', uvrw = 'u, v, reliability, weight'.\n\
  - --coords reads 'x, y' rows and builds the complete mesh over them instead of an edge list.\n\
  - reliability measures vertex 0 against every terminal; --terminals defaults to the highest vertex id.\n\
  - --cost selects the unit of path costs and of the diameter budget: edge count (hops) or edge weight (weight).\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "components" => args.command = Command::Components,
            "cycles" => args.command = Command::Cycles,
            "paths" => args.command = Command::Paths,
            "reliability" => args.command = Command::Reliability,
            "--pretty" => args.pretty = true,
            "--coords" => args.format = InputFormat::Coordinates,
            "--columns" => {
                let Some(columns) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.format = InputFormat::Edges(match columns.as_str() {
                    "uv" => EdgeColumns::Bare,
                    "uvw" => EdgeColumns::Weight,
                    "uvr" => EdgeColumns::Reliability,
                    "uvrw" => EdgeColumns::ReliabilityWeight,
                    _ => return Err(CliError::Usage(usage())),
                });
            }
            "--cost" => {
                let Some(cost) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.cost = match cost.as_str() {
                    "hops" => CostModel::Hops,
                    "weight" => CostModel::Weight,
                    _ => return Err(CliError::Usage(usage())),
                };
            }
            "--source" => {
                let Some(source) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.source = Some(source.parse().map_err(|_| CliError::Usage(usage()))?);
            }
            "--diameter" => {
                let Some(diameter) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.diameter = Some(diameter.parse().map_err(|_| CliError::Usage(usage()))?);
            }
            "--terminals" => {
                let Some(list) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let mut terminals = Vec::new();
                for part in list.split(',') {
                    terminals.push(
                        part.trim()
                            .parse::<VertexId>()
                            .map_err(|_| CliError::Usage(usage()))?,
                    );
                }
                args.terminals = Some(terminals);
            }
            "--max-subproblems" => {
                let Some(limit) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.max_subproblems = Some(limit.parse().map_err(|_| CliError::Usage(usage()))?);
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    match args.command {
        Command::Paths if args.source.is_none() => return Err(CliError::Usage(usage())),
        Command::Reliability if args.diameter.is_none() => return Err(CliError::Usage(usage())),
        _ => {}
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn read_graph(args: &Args) -> Result<Graph, CliError> {
    let text = read_input(args.input.as_deref())?;
    let graph = match args.format {
        InputFormat::Edges(columns) => seine::csv::parse_edge_list(&text, columns)?,
        InputFormat::Coordinates => seine::csv::parse_coordinates(&text)?,
    };
    Ok(graph)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let graph = read_graph(&args)?;

    match args.command {
        Command::Components => {
            let components = seine::component_count(&graph)?;
            let out = ComponentsOut {
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
                components,
                connected: components == 1,
            };
            write_json(&out, args.pretty)
        }
        Command::Cycles => {
            let out = CyclesOut {
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
                has_cycle: seine::has_cycle(&graph)?,
            };
            write_json(&out, args.pretty)
        }
        Command::Paths => {
            let Some(source) = args.source else {
                return Err(CliError::Usage(usage()));
            };
            let shortest = seine::dijkstra(&graph, source, args.cost)?;
            let out = PathsOut {
                source,
                paths: (0..graph.vertex_count())
                    .map(|v| PathOut {
                        distance: shortest.distance_to(v),
                        path: shortest.path_to(v),
                    })
                    .collect(),
            };
            write_json(&out, args.pretty)
        }
        Command::Reliability => {
            let Some(diameter) = args.diameter else {
                return Err(CliError::Usage(usage()));
            };
            let terminals = match args.terminals {
                Some(list) => list,
                None => vec![graph.vertex_count().saturating_sub(1)],
            };
            let options = ReliabilityOptions {
                cost: args.cost,
                max_subproblems: args.max_subproblems,
            };
            let out = ReliabilityOut {
                reliability: seine::reliability(&graph, diameter, &terminals, options)?,
                terminals,
            };
            write_json(&out, args.pretty)
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
