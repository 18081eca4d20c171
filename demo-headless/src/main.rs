use clap::{Parser, ValueEnum};
use serde::Serialize;
use wcv_core::encounter::{marker_values, sample_all, MarkerValue};
use wcv_core::{
    Encounter, EncounterEvents, NormVariant, SampledQuantity, SamplingPlan, SeverityTrace, Vect3,
    WcvThresholds,
};

/// Sample well-clear violation norms along a straight-line encounter
#[derive(Parser, Debug)]
#[command(name = "wcv-headless")]
#[command(about = "Well-clear violation norm comparison", long_about = None)]
struct Args {
    /// Time threshold TTHR in seconds
    #[arg(long, default_value_t = WcvThresholds::REFERENCE_TTHR)]
    tthr: f64,

    /// Time-to-co-altitude threshold TCOA in seconds (0 disables it)
    #[arg(long, default_value_t = WcvThresholds::REFERENCE_TCOA)]
    tcoa: f64,

    /// Horizontal distance threshold DTHR
    #[arg(long, default_value_t = WcvThresholds::REFERENCE_DTHR)]
    dthr: f64,

    /// Vertical distance threshold ZTHR
    #[arg(long, default_value_t = WcvThresholds::REFERENCE_ZTHR)]
    zthr: f64,

    /// Initial relative position x
    #[arg(long, default_value_t = -30000.0, allow_hyphen_values = true)]
    sx: f64,

    /// Initial relative position y
    #[arg(long, default_value_t = 2000.0, allow_hyphen_values = true)]
    sy: f64,

    /// Initial relative position z
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    sz: f64,

    /// Relative velocity x
    #[arg(long, default_value_t = 337.0, allow_hyphen_values = true)]
    vx: f64,

    /// Relative velocity y
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    vy: f64,

    /// Relative velocity z
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    vz: f64,

    /// Number of sampling intervals between entry and exit
    #[arg(short, long, default_value_t = 200)]
    steps: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Only sample this variant (reference, alt, alt-orig, alt-other)
    #[arg(long)]
    variant: Option<NormVariant>,

    /// Sample the horizontal sub-term instead of the full norm
    #[arg(long)]
    justy: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    thresholds: WcvThresholds,
    encounter: Encounter,
    events: EncounterEvents,
    markers: Vec<MarkerValue>,
    traces: &'a [SeverityTrace],
    min_index: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let thresholds = WcvThresholds::new(args.tthr, args.tcoa, args.dthr, args.zthr)?;
    let encounter = Encounter::new(
        Vect3::new(args.sx, args.sy, args.sz),
        Vect3::new(args.vx, args.vy, args.vz),
    );
    let events = encounter.events(&thresholds);

    let variants: Vec<NormVariant> = match args.variant {
        Some(variant) => vec![variant],
        None => NormVariant::ALL.to_vec(),
    };
    let quantity = if args.justy {
        SampledQuantity::HorizontalTerm
    } else {
        SampledQuantity::Severity
    };

    let plan = SamplingPlan::around_events(&events, args.steps)?.with_event_logging(true);
    let traces = sample_all(&encounter, &thresholds, &variants, quantity, &plan)?;
    let markers: Vec<MarkerValue> = variants
        .iter()
        .flat_map(|&variant| marker_values(&encounter, &thresholds, variant, quantity, &events))
        .collect();

    // First minimum of the reference trace, or of the only sampled one
    let min_index = traces
        .iter()
        .find(|t| t.variant == NormVariant::Reference)
        .or_else(|| traces.first())
        .and_then(SeverityTrace::min_index);

    let report = Report {
        thresholds,
        encounter,
        events,
        markers,
        traces: &traces,
        min_index,
    };

    match args.format {
        OutputFormat::Table => print_table(&report),
        OutputFormat::Csv => print_csv(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn print_table(report: &Report<'_>) {
    let t = &report.thresholds;
    println!("=== Well-Clear Violation Norms ===\n");
    println!(
        "Thresholds: TTHR {:.1}s | TCOA {:.1}s | DTHR {:.1} | ZTHR {:.1}",
        t.tthr, t.tcoa, t.dthr, t.zthr
    );
    println!(
        "Encounter:  s = {} | v = {}\n",
        report.encounter.position, report.encounter.velocity
    );

    let e = &report.events;
    println!("Event times:");
    println!("  time_in   {:10.3}", e.time_in);
    println!("  theta_in  {:10.3}", e.theta_in);
    println!("  tcpa      {:10.3}", e.tcpa);
    println!("  theta_out {:10.3}", e.theta_out);
    println!("  tcoa      {:10.3}\n", e.tcoa);

    println!("Marker values:");
    println!("Variant   | Marker    |    Time(s) |    Value");
    println!("----------|-----------|------------|---------");
    for m in &report.markers {
        println!(
            "{:9} | {:9} | {:10.3} | {:8.4}",
            m.variant.name(),
            m.label,
            m.time,
            m.value
        );
    }

    println!();
    let mut header = format!("{:>10}", "Time(s)");
    for trace in report.traces {
        header.push_str(&format!(" | {:>9}", trace.variant.name()));
    }
    println!("{header}");
    println!("{}", "-".repeat(header.len()));
    let rows = report.traces.first().map_or(0, SeverityTrace::len);
    for i in 0..rows {
        let mut row = format!("{:10.3}", report.traces[0].times[i]);
        for trace in report.traces {
            row.push_str(&format!(" | {:9.4}", trace.values[i]));
        }
        println!("{row}");
    }

    match report.min_index {
        Some(i) => println!(
            "\nFirst minimum at index {i} (t = {:.3}s)",
            report.traces[0].times[i]
        ),
        None => println!("\nNo samples"),
    }
}

fn print_csv(report: &Report<'_>) {
    let e = &report.events;
    println!(
        "# time_in={},theta_in={},tcpa={},theta_out={},tcoa={}",
        e.time_in, e.theta_in, e.tcpa, e.theta_out, e.tcoa
    );
    for m in &report.markers {
        println!("# marker,{},{},{},{}", m.variant, m.label, m.time, m.value);
    }
    if let Some(i) = report.min_index {
        println!("# min_index={i}");
    }

    let names: Vec<&str> = report.traces.iter().map(|t| t.variant.name()).collect();
    println!("t,{}", names.join(","));
    let rows = report.traces.first().map_or(0, SeverityTrace::len);
    for i in 0..rows {
        let values: Vec<String> = report
            .traces
            .iter()
            .map(|t| t.values[i].to_string())
            .collect();
        println!("{},{}", report.traces[0].times[i], values.join(","));
    }
}
