//! Command implementations for the Corrigo CLI.

use log::info;

use crate::api::spellcheck::SpellCheckClient;
use crate::api::websearch::{SearchConfig, SearchResponse, WebSearchClient};
use crate::browser::{BrowserConfig, open_url};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::reconcile::{highlight, reconcile_with_diagnostics};

/// Execute a CLI command.
pub fn execute_command(args: CorrigoArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_text(check_args.clone(), &args),
        Command::Search(search_args) => search_web(search_args.clone(), &args),
        Command::SiteSearch(site_args) => search_site(site_args.clone(), &args),
    }
}

/// Spell-check a sentence and report corrections.
fn check_text(args: CheckArgs, cli_args: &CorrigoArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Checking: {}", args.text);
        println!("Mode: {:?}", args.mode);
    }

    let client = SpellCheckClient::new(&args.key)?;
    let flagged = client.check(&args.text, args.mode)?;
    info!("service flagged {} token(s)", flagged.len());

    if args.highlight {
        println!("{}", highlight(&args.text, &flagged));
        return Ok(());
    }

    let (result, diagnostics) = reconcile_with_diagnostics(&args.text, &flagged);

    if args.correct {
        println!("{}", result.corrected_text);
        return Ok(());
    }

    output_result(
        "Check completed",
        &CheckResults {
            original: args.text,
            corrected: result.corrected_text,
            applied_corrections: result.applied_corrections,
            diagnostics,
            flagged_tokens: flagged,
        },
        cli_args,
    )?;

    Ok(())
}

/// Search the web.
fn search_web(args: SearchArgs, cli_args: &CorrigoArgs) -> Result<()> {
    let config = SearchConfig {
        market: args.market.clone(),
        safe_search: args.safesearch,
        count: args.count,
        offset: args.offset,
    };

    if cli_args.verbosity() > 1 {
        println!("Query: {}", args.query);
        println!("Market: {} SafeSearch: {}", config.market, config.safe_search);
    }

    let client = WebSearchClient::new(&args.key)?;
    let response = client.search(&args.query, &config)?;

    let opened = maybe_open_first(&response, args.open, args.browser.as_deref())?;
    report_search(response, opened, cli_args)
}

/// Search the web, restricted to one site.
fn search_site(args: SiteSearchArgs, cli_args: &CorrigoArgs) -> Result<()> {
    let config = SearchConfig {
        market: args.market.clone(),
        safe_search: args.safesearch,
        count: args.count,
        offset: args.offset,
    };

    if cli_args.verbosity() > 1 {
        println!("Site: {}", args.site);
        println!("Query: {}", args.query);
    }

    let client = WebSearchClient::new(&args.key)?;
    let response = client.search_site(&args.site, &args.query, &config)?;

    let opened = maybe_open_first(&response, args.open, args.browser.as_deref())?;
    report_search(response, opened, cli_args)
}

/// Launch the first result when requested; returns the URL that was opened.
fn maybe_open_first(
    response: &SearchResponse,
    open: bool,
    browser: Option<&str>,
) -> Result<Option<String>> {
    if !open {
        return Ok(None);
    }

    let Some(url) = response.first_url() else {
        info!("--open requested but the search returned no results");
        return Ok(None);
    };

    let config = BrowserConfig {
        command: browser.map(str::to_string),
    };
    open_url(url, &config)?;

    Ok(Some(url.to_string()))
}

/// Format a search response for the terminal.
fn report_search(
    response: SearchResponse,
    opened_url: Option<String>,
    cli_args: &CorrigoArgs,
) -> Result<()> {
    let hits = response
        .pages
        .iter()
        .enumerate()
        .map(|(i, page)| SearchHit {
            rank: i + 1,
            name: page.name.clone(),
            url: page.url.clone(),
            snippet: page.snippet.clone(),
        })
        .collect();

    output_result(
        "Search completed",
        &SearchResults {
            query: response.query,
            total_estimated_matches: response.total_estimated_matches,
            hits,
            opened_url,
        },
        cli_args,
    )?;

    Ok(())
}
