//! Explicit update operations over the finished catalog tree.
//!
//! The editing stage addresses products by category name plus index within
//! that category (the shape the data grid works with). Rather than handing
//! out shared mutable references into the tree, each operation takes the
//! tree by value and returns the updated tree, so a failed update leaves
//! nothing half-applied and the invariants stay checkable in isolation.

use thiserror::Error;

use crate::catalog::CategoryRecord;

/// Errors from tree update operations.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("unknown category: \"{0}\"")]
    UnknownCategory(String),

    #[error("product index {index} out of range for category \"{category}\" ({len} products)")]
    IndexOutOfRange {
        category: String,
        index: usize,
        len: usize,
    },
}

/// A single editable scalar field of a product, with its new value.
///
/// `Price` and `MonthlyPayment` are independent on purpose: the grid lets the
/// operator override either without the other being recomputed.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductField {
    Name(String),
    Url(String),
    Price(f64),
    MonthlyPayment(i64),
    Description(String),
    Images(Vec<String>),
}

/// Applies `field` to the product at `index` inside the category named
/// `category`, returning the updated tree.
///
/// # Errors
///
/// - [`EditError::UnknownCategory`] if no category carries that name.
/// - [`EditError::IndexOutOfRange`] if `index` exceeds the category's
///   product list.
pub fn update_product_field(
    mut tree: Vec<CategoryRecord>,
    category: &str,
    index: usize,
    field: ProductField,
) -> Result<Vec<CategoryRecord>, EditError> {
    let record = tree
        .iter_mut()
        .find(|c| c.category_name == category)
        .ok_or_else(|| EditError::UnknownCategory(category.to_owned()))?;

    let len = record.products.len();
    let product = record
        .products
        .get_mut(index)
        .ok_or_else(|| EditError::IndexOutOfRange {
            category: category.to_owned(),
            index,
            len,
        })?;

    match field {
        ProductField::Name(name) => product.name = name,
        ProductField::Url(url) => product.url = url,
        ProductField::Price(price) => product.price = price,
        ProductField::MonthlyPayment(payment) => product.monthly_payment = payment,
        ProductField::Description(description) => product.description = description,
        ProductField::Images(images) => product.images = images,
    }

    Ok(tree)
}

/// Renames the category called `from` to `to`, updating both the category
/// record and the `category_name` duplicated onto each of its products.
///
/// # Errors
///
/// Returns [`EditError::UnknownCategory`] if no category is named `from`.
pub fn rename_category(
    mut tree: Vec<CategoryRecord>,
    from: &str,
    to: &str,
) -> Result<Vec<CategoryRecord>, EditError> {
    let record = tree
        .iter_mut()
        .find(|c| c.category_name == from)
        .ok_or_else(|| EditError::UnknownCategory(from.to_owned()))?;

    record.category_name = to.to_owned();
    for product in &mut record.products {
        product.category_name = to.to_owned();
    }

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductRecord;

    fn product(name: &str, category: &str) -> ProductRecord {
        ProductRecord {
            id: "1".into(),
            alias: "p-1".into(),
            category_name: category.into(),
            url: "https://www.21vek.by/p-1.html".into(),
            name: name.into(),
            images: vec!["https://img.example/1.jpg".into()],
            price: 1000.0,
            monthly_payment: 20,
            attributes: vec![],
            description: String::new(),
        }
    }

    fn tree() -> Vec<CategoryRecord> {
        vec![CategoryRecord {
            category_id: "t1".into(),
            category_name: "Тостеры".into(),
            products: vec![product("Тостер A", "Тостеры"), product("Тостер B", "Тостеры")],
        }]
    }

    #[test]
    fn updates_price_without_touching_monthly_payment() {
        let updated = update_product_field(tree(), "Тостеры", 1, ProductField::Price(480.0)).unwrap();
        assert_eq!(updated[0].products[1].price, 480.0);
        assert_eq!(updated[0].products[1].monthly_payment, 20);
        // Sibling untouched.
        assert_eq!(updated[0].products[0].price, 1000.0);
    }

    #[test]
    fn updates_name_in_place() {
        let updated =
            update_product_field(tree(), "Тостеры", 0, ProductField::Name("Тостер X".into()))
                .unwrap();
        assert_eq!(updated[0].products[0].name, "Тостер X");
    }

    #[test]
    fn unknown_category_is_an_error() {
        let err = update_product_field(tree(), "Чайники", 0, ProductField::Price(1.0)).unwrap_err();
        assert!(matches!(err, EditError::UnknownCategory(ref c) if c == "Чайники"));
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let err = update_product_field(tree(), "Тостеры", 2, ProductField::Price(1.0)).unwrap_err();
        assert!(
            matches!(err, EditError::IndexOutOfRange { index: 2, len: 2, .. }),
            "got: {err:?}"
        );
    }

    #[test]
    fn rename_category_updates_products_too() {
        let updated = rename_category(tree(), "Тостеры", "Тостеры и грили").unwrap();
        assert_eq!(updated[0].category_name, "Тостеры и грили");
        assert!(updated[0]
            .products
            .iter()
            .all(|p| p.category_name == "Тостеры и грили"));
    }

    #[test]
    fn rename_unknown_category_is_an_error() {
        let err = rename_category(tree(), "Чайники", "Самовары").unwrap_err();
        assert!(matches!(err, EditError::UnknownCategory(_)));
    }
}
