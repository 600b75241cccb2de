mod catalog;
mod cli;
mod config;
mod engine;
mod error;
mod input;
mod report;
mod template;
mod types;

use crate::error::CareerscopeError;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NO_MATCHES: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_format(
    flag: Option<cli::ReportFormat>,
    config: Option<&types::config::CareerscopeConfig>,
) -> report::OutputFormat {
    if let Some(format) = flag {
        return match format {
            cli::ReportFormat::Text => report::OutputFormat::Text,
            cli::ReportFormat::Md => report::OutputFormat::Md,
            cli::ReportFormat::Json => report::OutputFormat::Json,
        };
    }
    match config.and_then(|cfg| cfg.default_format()) {
        Some("md") => report::OutputFormat::Md,
        Some("json") => report::OutputFormat::Json,
        _ => report::OutputFormat::Text,
    }
}

fn run() -> Result<i32, CareerscopeError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Recommend(cmd) => {
            if !cmd.path.exists() {
                return Err(CareerscopeError::PathNotFound(
                    cmd.path.display().to_string(),
                ));
            }

            let config_dir = cmd.path.parent().unwrap_or_else(|| Path::new("."));
            let loaded = config::load_config(config_dir)?;
            let profile = input::load_profile(&cmd.path)?;

            if !profile.has_scoring_input() {
                eprintln!(
                    "warning: profile has no non-zero marks and no interests; \
                     nothing will qualify"
                );
            }

            let policy = loaded
                .as_ref()
                .map(|cfg| cfg.scoring_policy())
                .unwrap_or_default();
            let recommendations = engine::recommend(
                &profile.marks,
                &profile.interests,
                catalog::catalog(),
                &policy,
            );
            let qualified = !recommendations.is_empty();

            let match_report = types::report::MatchReport::new(profile.name, recommendations);
            let format = resolve_format(cmd.format, loaded.as_ref());
            let rendered = report::render(&match_report, format)?;
            println!("{rendered}");

            if qualified {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::NO_MATCHES)
            }
        }
        cli::Commands::Careers(cmd) => {
            match cmd.format {
                cli::CatalogFormat::Json => {
                    let entries = catalog::catalog()
                        .iter()
                        .map(|profile| {
                            serde_json::json!({
                                "name": profile.name,
                                "description": profile.description,
                                "top_skills": profile.top_skills,
                                "average_salary": profile.average_salary,
                                "job_outlook": profile.job_outlook,
                            })
                        })
                        .collect::<Vec<_>>();
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                }
                cli::CatalogFormat::Text => {
                    for profile in catalog::catalog() {
                        println!("{}", profile.name);
                        println!("  {}", profile.description);
                        println!(
                            "  {} | {}",
                            profile.average_salary, profile.job_outlook
                        );
                    }
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Info(cmd) => {
            match catalog::find(&cmd.career) {
                Some(profile) => {
                    println!("{}", profile.name);
                    println!("{}\n", profile.description);
                    println!("Salary: {}", profile.average_salary);
                    println!("Outlook: {}", profile.job_outlook);
                    println!("Top skills: {}", profile.top_skills.join(", "));
                }
                None => {
                    println!("{}", cmd.career);
                    println!("(not in the career catalog; showing general guidance)");
                }
            }

            let info = catalog::extended::extended_info(&cmd.career);
            println!("\nWork environment: {}", info.work_environment);
            println!("Typical day: {}", info.typical_day);
            println!("Education: {}", info.education);
            println!("Career path: {}", info.career_path.join(" -> "));
            println!("Industries: {}", info.industries.join(", "));
            println!("Schedule: {}", info.work_schedule);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Subjects => {
            for subject in catalog::SUBJECTS {
                println!("{subject}");
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Interests => {
            for interest in catalog::INTERESTS {
                println!("{interest}");
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Init(cmd) => {
            template::write_profile_template(&cmd.path, cmd.force)?;
            println!("wrote profile template: {}", cmd.path.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
