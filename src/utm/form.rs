//! Form values and the single update path

use super::date_rule::apply_date;
use chrono::NaiveDate;
use std::fmt;

/// Sentinel source tag that switches to the free-text `source_other` value
pub const OTHER_SOURCE: &str = "other_source";

/// Sentinel medium tag that switches to the free-text `medium_other` value
pub const OTHER_MEDIUM: &str = "other_medium";

/// Identifier of a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    WebsiteUrl,
    Source,
    SourceOther,
    Medium,
    MediumOther,
    CampaignName,
    DeliveryDate,
    Content,
}

impl FieldName {
    /// Stable key used when errors are reported per field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebsiteUrl => "websiteUrl",
            Self::Source => "source",
            Self::SourceOther => "sourceOther",
            Self::Medium => "medium",
            Self::MediumOther => "mediumOther",
            Self::CampaignName => "campaignName",
            Self::DeliveryDate => "deliveryDate",
            Self::Content => "content",
        }
    }

    /// Human label shown next to the field
    pub fn label(&self) -> &'static str {
        match self {
            Self::WebsiteUrl => "Website URL*",
            Self::Source => "Source*",
            Self::SourceOther => "Custom source*",
            Self::Medium => "Medium*",
            Self::MediumOther => "Custom medium*",
            Self::CampaignName => "Campaign name*",
            Self::DeliveryDate => "Delivery date (YYYY-MM-DD)",
            Self::Content => "Content (optional)",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A change to exactly one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    WebsiteUrl(String),
    Source(String),
    SourceOther(String),
    Medium(String),
    MediumOther(String),
    /// Manual edit of the campaign name text
    CampaignName(String),
    /// Date selection; rewrites the campaign name prefix
    DeliveryDate(Option<NaiveDate>),
    Content(String),
}

impl FieldUpdate {
    /// The field this update targets
    pub fn field(&self) -> FieldName {
        match self {
            Self::WebsiteUrl(_) => FieldName::WebsiteUrl,
            Self::Source(_) => FieldName::Source,
            Self::SourceOther(_) => FieldName::SourceOther,
            Self::Medium(_) => FieldName::Medium,
            Self::MediumOther(_) => FieldName::MediumOther,
            Self::CampaignName(_) => FieldName::CampaignName,
            Self::DeliveryDate(_) => FieldName::DeliveryDate,
            Self::Content(_) => FieldName::Content,
        }
    }
}

/// Snapshot of everything the user has entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub website_url: String,
    pub source: String,
    pub source_other: String,
    pub medium: String,
    pub medium_other: String,
    pub campaign_name: String,
    pub content: String,
    pub delivery_date: Option<NaiveDate>,
}

impl FormState {
    /// Empty form with the given source and medium preselected
    pub fn with_defaults(source: impl Into<String>, medium: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            medium: medium.into(),
            ..Default::default()
        }
    }

    /// Produce the next snapshot with `update` applied.
    ///
    /// A date selection rewrites the campaign name through [`apply_date`].
    /// A manual campaign name edit drops the stored date, since the text
    /// is no longer guaranteed to carry its prefix.
    pub fn apply(&self, update: FieldUpdate) -> FormState {
        let mut next = self.clone();
        match update {
            FieldUpdate::WebsiteUrl(v) => next.website_url = v,
            FieldUpdate::Source(v) => next.source = v,
            FieldUpdate::SourceOther(v) => next.source_other = v,
            FieldUpdate::Medium(v) => next.medium = v,
            FieldUpdate::MediumOther(v) => next.medium_other = v,
            FieldUpdate::CampaignName(v) => {
                next.campaign_name = v;
                next.delivery_date = None;
            }
            FieldUpdate::DeliveryDate(date) => {
                next.campaign_name = apply_date(date, &self.campaign_name);
                next.delivery_date = date;
            }
            FieldUpdate::Content(v) => next.content = v,
        }
        next
    }

    pub fn is_other_source(&self) -> bool {
        self.source == OTHER_SOURCE
    }

    pub fn is_other_medium(&self) -> bool {
        self.medium == OTHER_MEDIUM
    }

    /// Source value that ends up in the link
    pub fn effective_source(&self) -> &str {
        if self.is_other_source() {
            &self.source_other
        } else {
            &self.source
        }
    }

    /// Medium value that ends up in the link
    pub fn effective_medium(&self) -> &str {
        if self.is_other_medium() {
            &self.medium_other
        } else {
            &self.medium
        }
    }

    /// Text currently held by a free-text field, `None` for choice and date fields
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::WebsiteUrl => Some(&self.website_url),
            FieldName::SourceOther => Some(&self.source_other),
            FieldName::MediumOther => Some(&self.medium_other),
            FieldName::CampaignName => Some(&self.campaign_name),
            FieldName::Content => Some(&self.content),
            FieldName::Source | FieldName::Medium | FieldName::DeliveryDate => None,
        }
    }
}
