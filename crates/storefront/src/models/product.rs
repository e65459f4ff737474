//! Product domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ecofinds_core::{Category, Price, ProductId, UserId};

/// A marketplace listing.
///
/// Products are immutable once created; the only write operation beyond
/// creation is deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Listing title.
    pub title: String,
    /// Listing description.
    pub description: String,
    /// The single category this listing belongs to.
    pub category: Category,
    /// Asking price (strictly positive).
    pub price: Price,
    /// Image URL for the listing.
    pub image_url: String,
    /// ID of the user who listed the item.
    pub owner_id: UserId,
    /// Display name of the user who listed the item.
    pub owner_name: String,
    /// Date the listing was created.
    pub created_at: NaiveDate,
}

/// Errors that can occur when validating a [`ProductDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductDraftError {
    /// The title is empty after trimming.
    #[error("product title is required")]
    TitleRequired,
    /// The title is shorter than the minimum length.
    #[error("title must be at least {min} characters")]
    TitleTooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// The description is empty after trimming.
    #[error("product description is required")]
    DescriptionRequired,
    /// The description is shorter than the minimum length.
    #[error("description must be at least {min} characters")]
    DescriptionTooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// The price is zero or negative.
    #[error("price must be a positive amount")]
    PriceNotPositive,
}

/// Validated input for creating a listing.
///
/// Construction is the validation step: a `ProductDraft` that exists is a
/// draft the catalog will accept.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    title: String,
    description: String,
    category: Category,
    price: Price,
    image_url: Option<String>,
}

impl ProductDraft {
    /// Minimum title length.
    pub const MIN_TITLE_LENGTH: usize = 3;
    /// Minimum description length.
    pub const MIN_DESCRIPTION_LENGTH: usize = 10;

    /// Validate raw listing input into a draft.
    ///
    /// Title and description are trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns a `ProductDraftError` if the title or description is missing
    /// or too short, or the price is not strictly positive.
    pub fn new(
        title: &str,
        description: &str,
        category: Category,
        price: Price,
        image_url: Option<String>,
    ) -> Result<Self, ProductDraftError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ProductDraftError::TitleRequired);
        }
        if title.chars().count() < Self::MIN_TITLE_LENGTH {
            return Err(ProductDraftError::TitleTooShort {
                min: Self::MIN_TITLE_LENGTH,
            });
        }

        let description = description.trim();
        if description.is_empty() {
            return Err(ProductDraftError::DescriptionRequired);
        }
        if description.chars().count() < Self::MIN_DESCRIPTION_LENGTH {
            return Err(ProductDraftError::DescriptionTooShort {
                min: Self::MIN_DESCRIPTION_LENGTH,
            });
        }

        if !price.is_positive() {
            return Err(ProductDraftError::PriceNotPositive);
        }

        Ok(Self {
            title: title.to_owned(),
            description: description.to_owned(),
            category,
            price,
            image_url,
        })
    }

    /// The validated title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The validated description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The chosen category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// The validated price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// The supplied image URL, if any.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Consume the draft, returning the image URL or the given fallback.
    #[must_use]
    pub fn into_parts(self, fallback_image: &str) -> (String, String, Category, Price, String) {
        let image_url = self
            .image_url
            .unwrap_or_else(|| fallback_image.to_owned());
        (
            self.title,
            self.description,
            self.category,
            self.price,
            image_url,
        )
    }
}
