//! `kvp validate | list | get | param` – inspect request input.

use anyhow::{bail, Result};
use kvp_core::kvp::{self, param_map_from_query};
use kvp_core::token;

pub fn run_validate(input: &str) -> Result<()> {
    let ok = token::validate_input_tokens(input)?;
    println!("{ok}");
    Ok(())
}

pub fn run_list(source: &str, key: &str) -> Result<()> {
    for value in kvp::list_values(source, key)? {
        println!("{value}");
    }
    Ok(())
}

pub fn run_get(source: &str, key: &str) -> Result<()> {
    match kvp::single_value(source, key)? {
        Some(value) => println!("{value}"),
        None => bail!("key '{}' not found", key),
    }
    Ok(())
}

pub fn run_param(query: &str, name: &str) -> Result<()> {
    let params = param_map_from_query(query);
    let value = kvp::required_param(&params, name)?;
    println!("{value}");
    Ok(())
}
