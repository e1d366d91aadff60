//! The fixed field schema for an FNOL document.

use serde::{Deserialize, Serialize};

/// Effective-dates value: structured only when a "from–to" pattern was
/// found on the labeled line, otherwise the raw line remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EffectiveDates {
    /// A recognized "from ... to ..." date range
    Range {
        /// Start-of-cover date token, as written in the document
        from: String,
        /// End-of-cover date token, as written in the document
        to: String,
    },

    /// The labeled line remainder, kept verbatim
    Raw(String),
}

impl EffectiveDates {
    /// Whether the value carries any usable text
    pub fn is_blank(&self) -> bool {
        match self {
            EffectiveDates::Range { .. } => false,
            EffectiveDates::Raw(s) => s.trim().is_empty(),
        }
    }
}

/// Contact details pair. Always present as a whole; each half may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    /// Email address found anywhere in the document
    pub email: Option<String>,

    /// Phone number from a labeled line, or any phone-like digit run
    pub phone: Option<String>,
}

/// Asset category inferred from document keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Vehicle-family keywords matched (takes priority)
    Vehicle,
    /// Property-family keywords matched
    Property,
}

impl AssetType {
    /// Get the asset type as its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Vehicle => "vehicle",
            AssetType::Property => "property",
        }
    }
}

/// The extracted field record. Every key of the schema is always present;
/// an absent value is an explicit `None`, never an unset key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// Alphanumeric/dash policy token
    #[serde(rename = "Policy Number")]
    pub policy_number: Option<String>,

    /// Name on the policy
    #[serde(rename = "Policyholder Name")]
    pub policyholder_name: Option<String>,

    /// Cover period, structured when a from/to pair was found
    #[serde(rename = "Effective Dates")]
    pub effective_dates: Option<EffectiveDates>,

    /// Date of loss: canonical ISO calendar string when parseable, else the
    /// raw token as written
    #[serde(rename = "Date")]
    pub date: Option<String>,

    /// Clock token for the time of loss
    #[serde(rename = "Time")]
    pub time: Option<String>,

    /// Where the loss occurred
    #[serde(rename = "Location")]
    pub location: Option<String>,

    /// Free-text incident description, possibly multi-line
    #[serde(rename = "Description")]
    pub description: Option<String>,

    /// Claimant name; falls back to the policyholder name
    #[serde(rename = "Claimant")]
    pub claimant: Option<String>,

    /// Third parties involved
    #[serde(rename = "Third Parties")]
    pub third_parties: Option<String>,

    /// Email/phone pair; always present as a pair
    #[serde(rename = "Contact Details")]
    pub contact_details: ContactDetails,

    /// Vehicle or property
    #[serde(rename = "Asset Type")]
    pub asset_type: Option<AssetType>,

    /// VIN / registration / asset identifier token
    #[serde(rename = "Asset ID")]
    pub asset_id: Option<String>,

    /// Parsed damage estimate
    #[serde(rename = "Estimated Damage")]
    pub estimated_damage: Option<f64>,

    /// Explicit claim type, or classifier inference
    #[serde(rename = "Claim Type")]
    pub claim_type: Option<String>,

    /// Attachments line remainder, or the literal marker "Yes"
    #[serde(rename = "Attachments")]
    pub attachments: Option<String>,

    /// Raw estimate text as written in the document
    #[serde(rename = "Initial Estimate")]
    pub initial_estimate: Option<String>,
}

impl ExtractedFields {
    /// Whether the given field holds a usable (non-absent, non-blank) value
    pub fn is_present(&self, key: FieldKey) -> bool {
        fn text(v: &Option<String>) -> bool {
            v.as_deref().is_some_and(|s| !s.trim().is_empty())
        }

        match key {
            FieldKey::PolicyNumber => text(&self.policy_number),
            FieldKey::PolicyholderName => text(&self.policyholder_name),
            FieldKey::EffectiveDates => {
                self.effective_dates.as_ref().is_some_and(|e| !e.is_blank())
            }
            FieldKey::Date => text(&self.date),
            FieldKey::Time => text(&self.time),
            FieldKey::Location => text(&self.location),
            FieldKey::Description => text(&self.description),
            FieldKey::Claimant => text(&self.claimant),
            FieldKey::ThirdParties => text(&self.third_parties),
            FieldKey::ContactDetails => {
                text(&self.contact_details.email) || text(&self.contact_details.phone)
            }
            FieldKey::AssetType => self.asset_type.is_some(),
            FieldKey::AssetId => text(&self.asset_id),
            FieldKey::EstimatedDamage => self.estimated_damage.is_some(),
            FieldKey::ClaimType => text(&self.claim_type),
            FieldKey::Attachments => text(&self.attachments),
            FieldKey::InitialEstimate => text(&self.initial_estimate),
        }
    }
}

/// Typed handle for one field of the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// "Policy Number"
    PolicyNumber,
    /// "Policyholder Name"
    PolicyholderName,
    /// "Effective Dates"
    EffectiveDates,
    /// "Date"
    Date,
    /// "Time"
    Time,
    /// "Location"
    Location,
    /// "Description"
    Description,
    /// "Claimant"
    Claimant,
    /// "Third Parties"
    ThirdParties,
    /// "Contact Details"
    ContactDetails,
    /// "Asset Type"
    AssetType,
    /// "Asset ID"
    AssetId,
    /// "Estimated Damage"
    EstimatedDamage,
    /// "Claim Type"
    ClaimType,
    /// "Attachments"
    Attachments,
    /// "Initial Estimate"
    InitialEstimate,
}

impl FieldKey {
    /// All schema fields, in schema order
    pub const ALL: [FieldKey; 16] = [
        FieldKey::PolicyNumber,
        FieldKey::PolicyholderName,
        FieldKey::EffectiveDates,
        FieldKey::Date,
        FieldKey::Time,
        FieldKey::Location,
        FieldKey::Description,
        FieldKey::Claimant,
        FieldKey::ThirdParties,
        FieldKey::ContactDetails,
        FieldKey::AssetType,
        FieldKey::AssetId,
        FieldKey::EstimatedDamage,
        FieldKey::ClaimType,
        FieldKey::Attachments,
        FieldKey::InitialEstimate,
    ];

    /// Display name of the field, as used on the wire and in missing-field
    /// lists
    pub fn name(&self) -> &'static str {
        match self {
            FieldKey::PolicyNumber => "Policy Number",
            FieldKey::PolicyholderName => "Policyholder Name",
            FieldKey::EffectiveDates => "Effective Dates",
            FieldKey::Date => "Date",
            FieldKey::Time => "Time",
            FieldKey::Location => "Location",
            FieldKey::Description => "Description",
            FieldKey::Claimant => "Claimant",
            FieldKey::ThirdParties => "Third Parties",
            FieldKey::ContactDetails => "Contact Details",
            FieldKey::AssetType => "Asset Type",
            FieldKey::AssetId => "Asset ID",
            FieldKey::EstimatedDamage => "Estimated Damage",
            FieldKey::ClaimType => "Claim Type",
            FieldKey::Attachments => "Attachments",
            FieldKey::InitialEstimate => "Initial Estimate",
        }
    }

    /// Parse a display name back to its key
    pub fn parse(s: &str) -> Option<Self> {
        FieldKey::ALL.into_iter().find(|k| k.name() == s)
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
