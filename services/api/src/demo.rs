use clap::Args;
use toolhub::config::AppConfig;
use toolhub::engine::{self, format_number, Category};
use toolhub::error::AppError;
use toolhub::scoring::compatibility::{compatibility_report, CompatibilityInputs};
use toolhub::scoring::personality::{personality_profile, QuizAnswers};

#[derive(Args, Debug)]
pub(crate) struct ConvertArgs {
    /// Value to convert
    pub(crate) value: f64,
    /// Category key (defaults to the configured converter default)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Source unit key (defaults to the configured converter default)
    #[arg(long)]
    pub(crate) from: Option<String>,
    /// Target unit key (defaults to the configured converter default)
    #[arg(long)]
    pub(crate) to: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Value used for the conversion showcase
    #[arg(long, default_value_t = 100.0)]
    pub(crate) value: f64,
    /// Skip the scoring portion of the demo
    #[arg(long)]
    pub(crate) skip_scores: bool,
}

pub(crate) fn run_convert(args: ConvertArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let defaults = config.converter;

    let category = match args.category {
        Some(key) => Category::parse(&key)?,
        None => defaults.category,
    };
    let from = args.from.unwrap_or(defaults.from_unit);
    let to = args.to.unwrap_or(defaults.to_unit);

    let result = engine::convert(args.value, category, &from, &to)?;
    println!(
        "{} {} = {} {}",
        format_number(args.value),
        from,
        format_number(result),
        to
    );
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("== Conversion showcase ==");
    let showcase = [
        (Category::Length, "mile", "kilometer"),
        (Category::Weight, "pound", "kilogram"),
        (Category::Volume, "gallon", "liter"),
        (Category::Speed, "mile_per_hour", "kilometer_per_hour"),
        (Category::Energy, "kilocalorie", "kilojoule"),
        (Category::Temperature, "fahrenheit", "celsius"),
    ];
    for (category, from, to) in showcase {
        let result = engine::convert(args.value, category, from, to)?;
        println!(
            "  {:<12} {} {} = {} {}",
            category.label(),
            format_number(args.value),
            from,
            format_number(result),
            to
        );
    }

    if args.skip_scores {
        return Ok(());
    }

    println!();
    println!("== Compatibility report ==");
    let report = compatibility_report(&CompatibilityInputs {
        zodiac: 82.0,
        personality: 91.0,
        love_language: 77.0,
        lifestyle: 68.0,
        communication: 88.0,
        interests: 73.0,
        values: 85.0,
        goals: 79.0,
    })?;
    for entry in &report.components {
        println!("  {:<16} {}", entry.label, entry.score);
    }
    println!("  overall {} ({})", report.overall, report.verdict);

    println!();
    println!("== Personality profile ==");
    let profile = personality_profile(&QuizAnswers {
        openness: [85.0, 90.0, 75.0, 80.0],
        conscientiousness: [60.0, 55.0, 65.0, 60.0],
        extraversion: [35.0, 30.0, 45.0, 40.0],
        agreeableness: [70.0, 75.0, 72.0, 78.0],
        neuroticism: [25.0, 30.0, 20.0, 35.0],
    })?;
    for entry in &profile.traits {
        println!("  {:<18} {:>3} {}", entry.label, entry.score, entry.level);
    }
    println!("  dominant trait: {}", profile.dominant.label());

    Ok(())
}
