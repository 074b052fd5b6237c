//! Console renderings of each query. Every demo writes plain lines to `out`.

use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::cli::Demo;
use crate::models::job::Job;
use crate::queries::dates::{DateFormat, DateStringConverter};
use crate::queries::filters::{
    and, distinct_sorted_companies, email_if_matches, filter_by_location,
    filter_by_location_imperatively, in_state, is_junior_job, lucky_find, top_n_by_predicate,
    top_n_by_predicate_imperatively,
};
use crate::queries::menu::{render_indexed_menu, render_indexed_menu_imperatively};
use crate::queries::words::{most_common, word_frequency, word_frequency_imperatively};

const JUNIOR_LIMIT: usize = 3;
/// Printed between the loop form and the iterator form of a demo.
const SEPARATOR: &str = "----";

pub fn run<W: Write>(demo: &Demo, jobs: &[Job], out: &mut W) -> Result<()> {
    info!("Running demo {demo:?} over {} jobs", jobs.len());
    match demo {
        Demo::Portland => portland(jobs, out),
        Demo::Junior => junior(jobs, out),
        Demo::Captions => captions(jobs, out),
        Demo::Words { top } => words(jobs, *top, out),
        Demo::Lucky { term } => lucky(jobs, term, out),
        Demo::Companies { count } => companies(jobs, *count, out),
        Demo::Dates { limit, pattern } => dates(jobs, *limit, pattern.as_deref(), out),
        Demo::Email { state } => email(jobs, state, out),
    }
}

fn portland<W: Write>(jobs: &[Job], out: &mut W) -> Result<()> {
    for job in filter_by_location_imperatively(jobs, "Portland", "OR") {
        writeln!(out, "{job}")?;
    }
    writeln!(out, "{SEPARATOR}")?;
    for job in filter_by_location(jobs, "Portland", "OR") {
        writeln!(out, "{job}")?;
    }
    Ok(())
}

fn junior<W: Write>(jobs: &[Job], out: &mut W) -> Result<()> {
    for job in top_n_by_predicate_imperatively(jobs, is_junior_job, JUNIOR_LIMIT, |j| j) {
        writeln!(out, "{job}")?;
    }
    writeln!(out, "{SEPARATOR}")?;
    for job in top_n_by_predicate(jobs, is_junior_job, JUNIOR_LIMIT, |j| j) {
        writeln!(out, "{job}")?;
    }
    Ok(())
}

fn captions<W: Write>(jobs: &[Job], out: &mut W) -> Result<()> {
    let captions = top_n_by_predicate(jobs, is_junior_job, JUNIOR_LIMIT, |j| {
        j.caption.as_str()
    });
    for caption in captions {
        writeln!(out, "{caption}")?;
    }
    Ok(())
}

fn words<W: Write>(jobs: &[Job], top: usize, out: &mut W) -> Result<()> {
    for (word, count) in most_common(&word_frequency_imperatively(jobs), top) {
        writeln!(out, "{word} occurs {count} times")?;
    }
    writeln!(out, "{SEPARATOR}")?;
    for (word, count) in most_common(&word_frequency(jobs), top) {
        writeln!(out, "{word} occurs {count} times")?;
    }
    Ok(())
}

fn lucky<W: Write>(jobs: &[Job], term: &str, out: &mut W) -> Result<()> {
    writeln!(out, "{}", lucky_find(jobs, term).title_or_fallback())?;
    Ok(())
}

fn companies<W: Write>(jobs: &[Job], count: usize, out: &mut W) -> Result<()> {
    let companies = distinct_sorted_companies(jobs);
    for line in render_indexed_menu_imperatively(&companies, count)? {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{SEPARATOR}")?;
    for line in render_indexed_menu(&companies, count)? {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn dates<W: Write>(
    jobs: &[Job],
    limit: usize,
    pattern: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let converted: Vec<String> = match pattern {
        None => {
            let converter = DateStringConverter::new(DateFormat::Rfc1123, DateFormat::IsoDate);
            jobs.iter()
                .map(|job| converter.convert(&job.date_time_string))
                .take(limit)
                .collect::<Result<_, _>>()?
        }
        Some(pattern) => {
            let to_iso = DateStringConverter::new(DateFormat::Rfc1123, DateFormat::IsoDateTime);
            let to_site =
                DateStringConverter::new(DateFormat::IsoDateTime, DateFormat::pattern(pattern));
            let converter = to_iso.then(&to_site);
            jobs.iter()
                .map(|job| converter(&job.date_time_string))
                .take(limit)
                .collect::<Result<_, _>>()?
        }
    };
    for date in converted {
        writeln!(out, "{date}")?;
    }
    Ok(())
}

fn email<W: Write>(jobs: &[Job], state: &str, out: &mut W) -> Result<()> {
    let state_checker = in_state(state);
    let Some(job) = jobs.iter().find(|j| state_checker(j)) else {
        writeln!(out, "No jobs found in {state}")?;
        return Ok(());
    };
    let checker = and(state_checker, is_junior_job);
    if let Some(message) = email_if_matches(job, checker) {
        writeln!(out, "{message}")?;
    }
    Ok(())
}
