// UI layer: a simple interactive menu using `dialoguer`. Credentials are
// asked once and kept in memory only; every menu entry is a single client
// call shown under a spinner.

use crate::api::{WordstreamClient, DEFAULT_MAX_RESULTS};
use crate::models::KeywordVolume;
use anyhow::Result;
use dialoguer::{Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

struct Login {
    username: String,
    password: String,
}

/// Main interactive menu. Runs until the user chooses "Exit".
pub fn main_menu(api: WordstreamClient) -> Result<()> {
    let username: String = Input::new().with_prompt("Wordstream username").interact_text()?;
    let password: String = Password::new().with_prompt("Password").interact()?;
    let login = Login { username, password };

    loop {
        let items = vec![
            "API credits",
            "Keyword suggestions",
            "Keyword niches",
            "Keyword volumes",
            "Question keywords",
            "Related keywords",
            "Exit",
        ];
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => {
                let spinner = spinner("Fetching credits...")?;
                let res = api.api_credits(&login.username, &login.password);
                spinner.finish_and_clear();
                match res {
                    Ok(credits) => println!("Remaining monthly credits: {}", credits),
                    Err(e) => println!("Credit lookup failed: {}", e),
                }
            }
            1 => {
                let seed: String = Input::new().with_prompt("Seed keyword").interact_text()?;
                let max = ask_max_results()?;
                let spinner = spinner("Searching keywords...")?;
                let res = api.get_keywords(&login.username, &login.password, &seed, max);
                spinner.finish_and_clear();
                print_keywords(res);
            }
            2 => {
                let seeds = ask_seeds()?;
                let max = ask_max_results()?;
                let spinner = spinner("Grouping niches...")?;
                let res = api.get_keyword_niches(&login.username, &login.password, &seeds, max);
                spinner.finish_and_clear();
                print_volumes(res);
            }
            3 => {
                let seeds = ask_seeds()?;
                let spinner = spinner("Looking up volumes...")?;
                let res = api.get_keyword_volumes(&login.username, &login.password, &seeds);
                spinner.finish_and_clear();
                print_volumes(res);
            }
            4 => {
                let seeds = ask_seeds()?;
                let max = ask_max_results()?;
                let spinner = spinner("Searching questions...")?;
                let res = api.get_question_keywords(&login.username, &login.password, &seeds, max);
                spinner.finish_and_clear();
                print_volumes(res);
            }
            5 => {
                let seeds = ask_seeds()?;
                let max = ask_max_results()?;
                let spinner = spinner("Searching related keywords...")?;
                let res = api.get_related_keywords(&login.username, &login.password, &seeds, max);
                spinner.finish_and_clear();
                print_keywords(res);
            }
            6 => break,
            _ => {}
        }
    }
    Ok(())
}

fn spinner(msg: &'static str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(msg);
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}

fn ask_seeds() -> Result<String> {
    let seeds: String = Input::new()
        .with_prompt("Seed keywords (space separated)")
        .interact_text()?;
    Ok(seeds)
}

fn ask_max_results() -> Result<usize> {
    let max: usize = Input::new()
        .with_prompt("Max results")
        .default(DEFAULT_MAX_RESULTS)
        .interact_text()?;
    Ok(max)
}

fn print_keywords(res: crate::error::Result<Vec<String>>) {
    match res {
        Ok(keywords) if keywords.is_empty() => println!("No keywords found."),
        Ok(keywords) => {
            for kw in keywords {
                println!("  {}", kw);
            }
        }
        Err(e) => println!("Request failed: {}", e),
    }
}

fn print_volumes(res: crate::error::Result<Vec<KeywordVolume>>) {
    match res {
        Ok(rows) if rows.is_empty() => println!("No keywords found."),
        Ok(rows) => {
            for row in rows {
                match row.volume {
                    Some(volume) => println!("  {:<40} {}", row.keyword, volume),
                    None => println!("  {:<40} -", row.keyword),
                }
            }
        }
        Err(e) => println!("Request failed: {}", e),
    }
}
