use anyhow::{bail, Context};
use island_discovery::config::GridConfig;
use island_discovery::core::Color;
use island_discovery::session::IslandMap;
use island_discovery::view::{island_sizes, render_ascii};

const USAGE: &str = "usage: island-discovery [config.json] [--recolor ROW COL #RRGGBB] [--flatten #RRGGBB] [--json]";

enum Action {
    Recolor(usize, usize, Color),
    Flatten(Color),
}

struct Args {
    config: Option<String>,
    actions: Vec<Action>,
    json: bool,
    help: bool,
}

fn main() -> anyhow::Result<()> {
    let args = parse_args(std::env::args().skip(1).collect())?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }
    let config = match &args.config {
        Some(path) => GridConfig::load(path).with_context(|| format!("loading {}", path))?,
        None => GridConfig::default(),
    };

    println!("Island Discovery");
    println!("================\n");
    println!("Grid: {}x{} | land threshold: {}%", config.size, config.size, config.land_threshold);

    let mut map = IslandMap::from_config(&config)?;
    let report = map.regenerate(config.land_threshold);
    report.print_summary();

    if let Some((id, cells)) = island_sizes(map.grid()).into_iter().max_by_key(|&(_, n)| n) {
        println!("Largest island: #{} ({} cells)", id, cells);
    }

    for action in &args.actions {
        match *action {
            Action::Recolor(row, col, color) => {
                let painted = map.recolor_region(row, col, color)?;
                println!("recolor ({}, {}) -> {}: {} cells", row, col, color, painted);
            }
            Action::Flatten(color) => {
                let painted = map.recolor_all(color);
                println!("flatten -> {}: {} cells", color, painted);
            }
        }
    }

    if args.json {
        println!("{}", map.snapshot().to_json()?);
    } else {
        println!("\n{}", render_ascii(map.grid()));
    }
    Ok(())
}

fn parse_args(raw: Vec<String>) -> anyhow::Result<Args> {
    let mut args = Args { config: None, actions: Vec::new(), json: false, help: false };
    let mut it = raw.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--recolor" => {
                let (Some(row), Some(col), Some(hex)) = (it.next(), it.next(), it.next()) else {
                    bail!("--recolor needs ROW COL COLOR\n{}", USAGE);
                };
                let row = row.parse().with_context(|| format!("bad row '{}'", row))?;
                let col = col.parse().with_context(|| format!("bad column '{}'", col))?;
                args.actions.push(Action::Recolor(row, col, parse_hex_color(&hex)?));
            }
            "--flatten" => {
                let Some(hex) = it.next() else {
                    bail!("--flatten needs COLOR\n{}", USAGE);
                };
                args.actions.push(Action::Flatten(parse_hex_color(&hex)?));
            }
            "-h" | "--help" => args.help = true,
            path if args.config.is_none() && !path.starts_with('-') => {
                args.config = Some(path.to_string());
            }
            other => bail!("unexpected argument '{}'\n{}", other, USAGE),
        }
    }
    Ok(args)
}

/// Accepts `#RGB` and `#RRGGBB`, either case.
fn parse_hex_color(text: &str) -> anyhow::Result<Color> {
    let Some(hex) = text.strip_prefix('#') else {
        bail!("color '{}' must start with '#'", text);
    };
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("color '{}' is not hexadecimal", text);
    }
    let value = match hex.len() {
        6 => u32::from_str_radix(hex, 16)?,
        3 => {
            let doubled: String = hex.chars().flat_map(|c| [c, c]).collect();
            u32::from_str_radix(&doubled, 16)?
        }
        _ => bail!("color '{}' needs 3 or 6 hex digits", text),
    };
    Ok(Color::from_u32(value))
}
