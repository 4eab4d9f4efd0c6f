//! List catalog products.

use anyhow::{bail, Result};
use rybalov_commerce::catalog::{self, Product};

use super::CatalogArgs;
use crate::context::Context;

const WIDTHS: [usize; 4] = [4, 26, 10, 10];

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let products = select(catalog::products(), args.category.as_deref());

    if products.is_empty() {
        if let Some(category) = args.category {
            bail!("No products in category `{}`", category);
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("Каталог");
    ctx.output
        .table_row(&["ID", "Товар", "Цена", "Категория"], &WIDTHS);
    for product in &products {
        let id = product.id.to_string();
        let price = product.price.display();
        ctx.output
            .table_row(&[&id, product.name, &price, product.category], &WIDTHS);
    }

    Ok(())
}

fn select<'a>(products: &'a [Product], category: Option<&str>) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| category.map_or(true, |c| p.category.to_lowercase() == c.trim().to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all() {
        assert_eq!(select(catalog::products(), None).len(), 6);
    }

    #[test]
    fn test_select_category_case_insensitive() {
        let ids: Vec<u32> = select(catalog::products(), Some("оснастка"))
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(ids, vec![5, 6]);
    }

    #[test]
    fn test_select_unknown_category() {
        assert!(select(catalog::products(), Some("Лодки")).is_empty());
    }
}
