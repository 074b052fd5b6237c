use crate::errors::QueryError;

/// Number of entries shown in the company menu.
pub const MENU_SIZE: usize = 20;

fn ensure_enough<T>(items: &[T], count: usize) -> Result<(), QueryError> {
    if items.len() < count {
        return Err(QueryError::InsufficientItems {
            requested: count,
            available: items.len(),
        });
    }
    Ok(())
}

/// Renders `"<n>. <item>"` lines for the first `count` items, numbered from 1.
///
/// Fails with [`QueryError::InsufficientItems`] when fewer than `count` items
/// are available rather than rendering a short menu.
pub fn render_indexed_menu<S: AsRef<str>>(
    items: &[S],
    count: usize,
) -> Result<Vec<String>, QueryError> {
    ensure_enough(items, count)?;
    Ok((0..count)
        .map(|i| format!("{}. {}", i + 1, items[i].as_ref()))
        .collect())
}

/// Index-loop form of [`render_indexed_menu`].
#[allow(clippy::needless_range_loop)]
pub fn render_indexed_menu_imperatively<S: AsRef<str>>(
    items: &[S],
    count: usize,
) -> Result<Vec<String>, QueryError> {
    ensure_enough(items, count)?;
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        lines.push(format!("{}. {}", i + 1, items[i].as_ref()));
    }
    Ok(lines)
}
