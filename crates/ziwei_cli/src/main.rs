use clap::{Parser, Subcommand};
use ziwei_base::birth::{BirthData, Gender, five_tigers_stems, life_palace_branch};
use ziwei_base::bureau::{Bureau, bureau_for};
use ziwei_base::cycle::{Branch, Stem, hour_branch_from_clock, year_branch, year_stem};
use ziwei_base::limit::small_limit_branch;
use ziwei_base::palace::GRID_BRANCHES;
use ziwei_base::zi_wei_branch;
use ziwei_chart::{Chart, ChartConfig, compute_chart, palace_summary, resolve_small_limit};

#[derive(Parser)]
#[command(name = "ziwei", about = "Zi Wei Dou Shu chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print a full natal chart
    Chart {
        /// Birth year (Gregorian number of the lunar year)
        year: i32,
        /// Lunar month (1-12)
        month: u8,
        /// Lunar day (1-30)
        day: u8,
        /// Birth hour: a branch symbol (e.g. 子) or a 0-23 clock hour
        #[arg(long)]
        hour: String,
        /// Gender: m or f
        #[arg(long)]
        gender: String,
        /// Decade overlay anchor branch symbol
        #[arg(long)]
        decade: Option<String>,
        /// Year overlay anchor branch symbol
        #[arg(long = "flow-year")]
        flow_year: Option<String>,
        /// Print the chart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interpretation summary text for one palace
    Summary {
        /// Branch symbol of the palace
        branch: String,
        /// Birth year (Gregorian number of the lunar year)
        year: i32,
        /// Lunar month (1-12)
        month: u8,
        /// Lunar day (1-30)
        day: u8,
        /// Birth hour: a branch symbol or a 0-23 clock hour
        #[arg(long)]
        hour: String,
        /// Gender: m or f
        #[arg(long)]
        gender: String,
    },
    /// Five-element bureau of a stem-branch pair
    Bureau {
        /// Stem symbol (e.g. 丙)
        stem: String,
        /// Branch symbol (e.g. 寅)
        branch: String,
    },
    /// Zi Wei anchor branch from a bureau number and lunar day
    Anchor {
        /// Bureau number (2-6)
        bureau: u8,
        /// Lunar day (1-30)
        day: u8,
    },
    /// Grid stems of a birth year by the five-tigers rule
    Stems {
        /// Birth year
        year: i32,
    },
    /// Life palace branch from lunar month and birth hour
    LifeBranch {
        /// Lunar month (1-12)
        month: u8,
        /// Birth hour: a branch symbol or a 0-23 clock hour
        #[arg(long)]
        hour: String,
    },
    /// Small-limit branch at a nominal age
    SmallLimit {
        /// Birth year
        year: i32,
        /// Nominal age (1-based)
        age: u16,
        /// Gender: m or f
        #[arg(long)]
        gender: String,
    },
}

fn require_branch(s: &str) -> Branch {
    let parsed = s
        .chars()
        .next()
        .filter(|_| s.chars().count() == 1)
        .and_then(Branch::from_symbol);
    match parsed {
        Some(b) => b,
        None => {
            eprintln!("Invalid branch symbol: {s}");
            std::process::exit(1);
        }
    }
}

fn require_stem(s: &str) -> Stem {
    let parsed = s
        .chars()
        .next()
        .filter(|_| s.chars().count() == 1)
        .and_then(Stem::from_symbol);
    match parsed {
        Some(st) => st,
        None => {
            eprintln!("Invalid stem symbol: {s}");
            std::process::exit(1);
        }
    }
}

/// Accept either a branch symbol or a 0-23 clock hour.
fn require_hour_branch(s: &str) -> Branch {
    if let Ok(h) = s.parse::<u8>() {
        if h < 24 {
            return hour_branch_from_clock(h);
        }
        eprintln!("Clock hour out of range 0-23: {h}");
        std::process::exit(1);
    }
    require_branch(s)
}

fn require_gender(s: &str) -> Gender {
    match s {
        "m" | "M" => Gender::Male,
        "f" | "F" => Gender::Female,
        _ => {
            eprintln!("Invalid gender: {s}. Use m or f.");
            std::process::exit(1);
        }
    }
}

fn build_chart(
    year: i32,
    month: u8,
    day: u8,
    hour: &str,
    gender: &str,
    decade: Option<Branch>,
    flow_year: Option<Branch>,
) -> (BirthData, ChartConfig, Chart) {
    let birth = BirthData {
        year,
        month,
        day,
        hour_branch: require_hour_branch(hour),
        gender: require_gender(gender),
    };
    let stems = five_tigers_stems(year_stem(year));
    let mut config = ChartConfig {
        life: Some(life_palace_branch(month, birth.hour_branch)),
        decade,
        year: flow_year,
        small: None,
    };

    let chart = match compute_chart(&stems, &config, Some(&birth)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // a year overlay inside an active decade pins the small limit
    if let Some(small) = resolve_small_limit(&config, &birth, &chart) {
        config.small = Some(small);
        match compute_chart(&stems, &config, Some(&birth)) {
            Ok(c) => return (birth, config, c),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }

    (birth, config, chart)
}

fn print_chart(chart: &Chart) {
    if let Some(bureau) = chart.bureau {
        println!("五行局: {} ({})", bureau.name(), bureau.value());
    }
    for p in &chart.palaces {
        let name = p.name.map(|n| n.name()).unwrap_or("--");
        let stars: Vec<String> = p
            .primary_stars
            .iter()
            .chain(&p.assistant_stars)
            .map(|s| match s.transformation {
                Some(t) => format!("{}({})", s.star.name(), t.label()),
                None => s.star.name().to_string(),
            })
            .collect();
        let window = p
            .decade_window
            .map(|w| format!("{} ({}-{}歲)", w.label(), w.start_age, w.end_age))
            .unwrap_or_default();
        let overlays: Vec<&str> = [&p.overlay.decade, &p.overlay.year, &p.overlay.small]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();

        println!(
            "[{:2}] {}{} {:<4} {:<12} {} {}",
            p.id,
            p.stem.symbol(),
            p.branch.symbol(),
            name,
            stars.join("、"),
            window,
            overlays.join(" ")
        );
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            year,
            month,
            day,
            hour,
            gender,
            decade,
            flow_year,
            json,
        } => {
            let decade = decade.as_deref().map(require_branch);
            let flow_year = flow_year.as_deref().map(require_branch);
            let (_, _, chart) = build_chart(year, month, day, &hour, &gender, decade, flow_year);
            if json {
                match serde_json::to_string_pretty(&chart) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("JSON encoding failed: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_chart(&chart);
            }
        }

        Commands::Summary {
            branch,
            year,
            month,
            day,
            hour,
            gender,
        } => {
            let branch = require_branch(&branch);
            let (_, _, chart) = build_chart(year, month, day, &hour, &gender, None, None);
            print!("{}", palace_summary(&chart, chart.palace_by_branch(branch)));
        }

        Commands::Bureau { stem, branch } => {
            let bureau = bureau_for(require_stem(&stem), require_branch(&branch));
            println!("{} ({})", bureau.name(), bureau.value());
        }

        Commands::Anchor { bureau, day } => {
            let bureau = match Bureau::from_value(bureau) {
                Some(b) => b,
                None => {
                    eprintln!("Invalid bureau number: {bureau}. Use 2-6.");
                    std::process::exit(1);
                }
            };
            if !(1..=30).contains(&day) {
                eprintln!("Lunar day out of range 1-30: {day}");
                std::process::exit(1);
            }
            let zw = zi_wei_branch(bureau, day);
            println!("紫微: {} (index {})", zw.symbol(), zw.index());
        }

        Commands::Stems { year } => {
            let ys = year_stem(year);
            println!(
                "{}: year stem {} ({}{})",
                year,
                ys.symbol(),
                ys.symbol(),
                year_branch(year).symbol()
            );
            let stems = five_tigers_stems(ys);
            for (slot, stem) in stems.iter().enumerate() {
                println!(
                    "[{:2}] {}{}",
                    slot,
                    stem.symbol(),
                    GRID_BRANCHES[slot].symbol()
                );
            }
        }

        Commands::LifeBranch { month, hour } => {
            if !(1..=12).contains(&month) {
                eprintln!("Lunar month out of range 1-12: {month}");
                std::process::exit(1);
            }
            let life = life_palace_branch(month, require_hour_branch(&hour));
            println!("命宮: {} (index {})", life.symbol(), life.index());
        }

        Commands::SmallLimit { year, age, gender } => {
            if age == 0 {
                eprintln!("Nominal age starts at 1");
                std::process::exit(1);
            }
            let small = small_limit_branch(year_branch(year), require_gender(&gender), age);
            println!("小限: {} (index {})", small.symbol(), small.index());
        }
    }
}
