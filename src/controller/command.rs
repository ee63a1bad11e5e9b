use crate::models::place::PlaceId;
use crate::view::listing::CountryFilter;
use crate::view::model::details_href;
use crate::view::node::Node;

pub const INDEX_PAGE: &str = "index.html";
pub const LOGIN_PAGE: &str = "login.html";

/// A user action or page lifecycle event.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login { email: String, password: String },
    LoadListing,
    FilterByCountry(CountryFilter),
    /// `query` is the page's `location.search`.
    LoadPlace { query: String },
    SubmitReview {
        place_id: PlaceId,
        comment: String,
        rating: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Index,
    Login,
    Place(PlaceId),
}

impl Page {
    pub fn href(&self) -> String {
        match self {
            Page::Index => INDEX_PAGE.to_string(),
            Page::Login => LOGIN_PAGE.to_string(),
            Page::Place(id) => details_href(id.as_str()),
        }
    }
}

/// Parts of a page whose content is replaced wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    PlacesList,
    PlaceDetails,
    Reviews,
}

/// Inline message lines, one per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageSlot {
    Login,
    PlacesList,
    PlaceDetails,
}

impl From<Region> for MessageSlot {
    fn from(region: Region) -> Self {
        match region {
            Region::PlacesList => MessageSlot::PlacesList,
            Region::PlaceDetails | Region::Reviews => MessageSlot::PlaceDetails,
        }
    }
}

/// What the page should do in response to a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Navigate(Page),
    ShowLoginLink(bool),
    Render(Region, Node),
    CountryOptions(Vec<String>),
    InlineError(MessageSlot, String),
    Alert(String),
    ClearReviewForm,
}
