//! Filtering, limiting and lookup queries over a list of jobs.
//!
//! Each query comes in the shape the console demos need: lazy iterators where
//! the caller only walks the result once, collected vectors where a limit is
//! applied.

use std::collections::BTreeSet;

use tracing::info;

use crate::models::job::Job;

/// Jobs located in exactly `city`, `state` (case-sensitive), in source order.
pub fn filter_by_location<'a, I>(
    jobs: I,
    city: &'a str,
    state: &'a str,
) -> impl Iterator<Item = &'a Job> + 'a
where
    I: IntoIterator<Item = &'a Job>,
    I::IntoIter: 'a,
{
    let at_location = and(in_state(state), in_city(city));
    jobs.into_iter().filter(move |job| at_location(job))
}

/// Loop form of [`filter_by_location`].
pub fn filter_by_location_imperatively<'a>(
    jobs: &'a [Job],
    city: &str,
    state: &str,
) -> Vec<&'a Job> {
    let mut matches = Vec::new();
    for job in jobs {
        if job.state == state && job.city == city {
            matches.push(job);
        }
    }
    matches
}

/// True when the lower-cased title mentions "junior" or "jr".
pub fn is_junior_job(job: &Job) -> bool {
    let title = job.title.to_lowercase();
    title.contains("junior") || title.contains("jr")
}

pub fn in_state(state: &str) -> impl Fn(&Job) -> bool + '_ {
    move |job: &Job| job.state == state
}

pub fn in_city(city: &str) -> impl Fn(&Job) -> bool + '_ {
    move |job: &Job| job.city == city
}

/// Composes two predicates; `second` is only evaluated when `first` holds.
pub fn and<P, Q>(first: P, second: Q) -> impl Fn(&Job) -> bool
where
    P: Fn(&Job) -> bool,
    Q: Fn(&Job) -> bool,
{
    move |job: &Job| first(job) && second(job)
}

/// The first `limit` jobs matching `predicate`, projected through `project`.
///
/// Stops pulling from `jobs` as soon as `limit` matches have been found, so
/// an expensive or unbounded source is only consumed as far as needed.
pub fn top_n_by_predicate<'a, I, P, F, T>(
    jobs: I,
    predicate: P,
    limit: usize,
    project: F,
) -> Vec<T>
where
    I: IntoIterator<Item = &'a Job>,
    P: Fn(&Job) -> bool,
    F: FnMut(&'a Job) -> T,
{
    jobs.into_iter()
        .filter(|job| predicate(job))
        .take(limit)
        .map(project)
        .collect()
}

/// Loop form of [`top_n_by_predicate`] with an explicit early exit.
pub fn top_n_by_predicate_imperatively<'a, I, P, F, T>(
    jobs: I,
    predicate: P,
    limit: usize,
    mut project: F,
) -> Vec<T>
where
    I: IntoIterator<Item = &'a Job>,
    P: Fn(&Job) -> bool,
    F: FnMut(&'a Job) -> T,
{
    let mut results = Vec::new();
    if limit == 0 {
        return results;
    }
    for job in jobs {
        if predicate(job) {
            results.push(project(job));
            if results.len() >= limit {
                break;
            }
        }
    }
    results
}

/// Outcome of a "feeling lucky" title search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuckyFind<'a> {
    Found(&'a Job),
    NotFound,
}

impl<'a> LuckyFind<'a> {
    pub const NOT_FOUND_MESSAGE: &'static str = "No Jobs found";

    pub fn job(self) -> Option<&'a Job> {
        match self {
            LuckyFind::Found(job) => Some(job),
            LuckyFind::NotFound => None,
        }
    }

    /// The found title, or the fixed "No Jobs found" fallback.
    pub fn title_or_fallback(self) -> &'a str {
        self.job()
            .map_or(Self::NOT_FOUND_MESSAGE, |job| job.title.as_str())
    }
}

/// First job whose title contains `search_term` (case-sensitive).
pub fn lucky_find<'a>(jobs: &'a [Job], search_term: &str) -> LuckyFind<'a> {
    jobs.iter()
        .find(|job| job.title.contains(search_term))
        .map_or(LuckyFind::NotFound, LuckyFind::Found)
}

/// Distinct company names in ascending order.
pub fn distinct_sorted_companies<'a, I>(jobs: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Job>,
{
    jobs.into_iter()
        .map(|job| job.company.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Builds the notification line for `job` when `checker` accepts it.
pub fn email_if_matches<P>(job: &Job, checker: P) -> Option<String>
where
    P: Fn(&Job) -> bool,
{
    if !checker(job) {
        return None;
    }
    info!(company = %job.company, "job matched notification checker");
    Some(format!("I am sending an email about: {job}"))
}
