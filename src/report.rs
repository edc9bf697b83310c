use std::fmt::Display;
use std::io::{self, Write};

use crate::data::compare::SetComparison;
use crate::data::model::MutationRecord;

const RULE: &str = "***********************";
const SEPARATOR: &str = "@@@@@@@@@@@@@@@@@@@@@@@";

// ---------------------------------------------------------------------------
// Report writer
// ---------------------------------------------------------------------------

/// Write the line comparison followed by the mutation comparison. With
/// `verbose`, every differing record is listed under its count.
pub fn write_report<W: Write>(
    out: &mut W,
    lines: &SetComparison<'_, String>,
    mutations: &SetComparison<'_, MutationRecord>,
    verbose: bool,
) -> io::Result<()> {
    writeln!(out, "LINE LITERAL COMPARISON")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Catalogue 1 has length:  {}", lines.left_len)?;
    writeln!(out, "Catalogue 2 has length:  {}", lines.right_len)?;
    writeln!(out)?;
    writeln!(out, "Common items between catalogues:  {}", lines.common)?;
    writeln!(out, "Items in catalogue 1 but not catalogue 2:  {}", lines.only_left.len())?;
    writeln!(out, "Items in catalogue 2 but not catalogue 1:  {}", lines.only_right.len())?;
    writeln!(out)?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)?;

    writeln!(out, "MUTATION COMPARISON")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Catalogue 1 has {} unique mutations", mutations.left_len)?;
    writeln!(out, "Catalogue 2 has {} unique mutations", mutations.right_len)?;
    writeln!(out)?;
    writeln!(out, "Common items between catalogues:  {}", mutations.common)?;
    writeln!(
        out,
        "Items in catalogue 1 but not catalogue 2:  {}",
        mutations.only_left.len()
    )?;
    if verbose {
        write_listing(out, &mutations.only_left)?;
    }
    writeln!(
        out,
        "Items in catalogue 2 but not catalogue 1:  {}",
        mutations.only_right.len()
    )?;
    if verbose {
        write_listing(out, &mutations.only_right)?;
    }
    Ok(())
}

fn write_listing<W: Write, T: Display>(out: &mut W, items: &[&T]) -> io::Result<()> {
    for item in items {
        writeln!(out, "{item}")?;
    }
    writeln!(out)
}
