//! UPDATE builder example for sqlqb
//!
//! Run with: cargo run --example update_builder -p sqlqb

use sqlqb::{Expr, QbError, UpdateBuilder, update};

fn main() -> Result<(), QbError> {
    // ============================================
    // Basic UPDATE
    // ============================================
    println!("=== Basic ===");

    let mut qb = update("products")?;
    qb.set("price", "$1")?
        .set("in_stock", "$2")?
        .and_where("id = $3")?;
    println!("{}", qb.build()?);

    // ============================================
    // Assignment ordering
    // ============================================
    println!("\n=== Assignment ordering ===");

    // Re-assigning a column keeps its original position and takes the
    // latest value.
    let mut qb = update("products")?;
    qb.set("price", "100")?
        .set("category", "'sale'")?
        .set("price", "80")?;
    println!("{}", qb.build()?);

    // Optional assignment: None skips the column entirely.
    let mut qb = update("products")?;
    qb.set("name", "$1")?.set_opt("category", None)?;
    println!("{}", qb.build()?);

    // ============================================
    // WHERE composition
    // ============================================
    println!("\n=== WHERE composition ===");

    // Repeated calls conjoin with AND.
    let mut qb = update("products")?;
    qb.set("in_stock", "FALSE")?;
    qb.and_where("price > 100")?.and_where("category = 'legacy'")?;
    println!("{}", qb.build()?);

    // Nested groups flatten depth-first into the same conjunction.
    let mut qb = update("products")?;
    qb.set("in_stock", "FALSE")?;
    qb.and_where_all([
        Expr::group(["price > 100", "price < 500"]),
        Expr::raw("category = 'mid'"),
    ])?;
    println!("{}", qb.build()?);

    // ============================================
    // Quoted identifiers
    // ============================================
    println!("\n=== Quoted identifiers ===");

    let mut qb = update(r#"public."ProductArchive""#)?;
    qb.set(r#""RetiredAt""#, "NOW()")?.and_where("id = $1")?;
    println!("{}", qb.build()?);

    // ============================================
    // Validation
    // ============================================
    println!("\n=== Validation ===");

    let empty = UpdateBuilder::new();
    match empty.build() {
        Ok(sql) => println!("unexpected: {sql}"),
        Err(e) => println!("render refused: {e}"),
    }

    let mut no_set = update("products")?;
    match no_set.and_where("id = 1")?.build() {
        Ok(sql) => println!("unexpected: {sql}"),
        Err(e) => println!("render refused: {e}"),
    }

    Ok(())
}
