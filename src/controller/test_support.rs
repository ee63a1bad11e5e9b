use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::PlacesApi;
use crate::error::{AuthError, FetchError, SubmitError};
use crate::models::place::{Place, PlaceId};
use crate::models::review::{Review, ReviewDraft};
use crate::models::session::SessionToken;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ApiCall {
    Login { email: String },
    ListPlaces { token: String },
    GetPlace { token: String, place_id: PlaceId },
    SubmitReview { place_id: PlaceId, draft: ReviewDraft },
}

/// Scripted API double that records every call it receives.
#[derive(Clone)]
pub(crate) struct RecordingApi {
    pub login: Result<SessionToken, AuthError>,
    pub places: Result<Vec<Place>, FetchError>,
    pub place: Result<Place, FetchError>,
    pub submit: Result<(), SubmitError>,
    calls: Rc<RefCell<Vec<ApiCall>>>,
}

impl RecordingApi {
    pub(crate) fn new() -> Self {
        Self {
            login: Ok(SessionToken::new("issued-token")),
            places: Ok(vec![
                sample_place("1", "Beach House", "USA"),
                sample_place("2", "Loft", "France"),
            ]),
            place: Ok(sample_place("2", "Loft", "France")),
            submit: Ok(()),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl PlacesApi for RecordingApi {
    async fn login(&self, email: &str, _password: &str) -> Result<SessionToken, AuthError> {
        self.record(ApiCall::Login {
            email: email.to_string(),
        });
        self.login.clone()
    }

    async fn list_places(&self, token: &SessionToken) -> Result<Vec<Place>, FetchError> {
        self.record(ApiCall::ListPlaces {
            token: token.as_str().to_string(),
        });
        self.places.clone()
    }

    async fn get_place_details(
        &self,
        token: &SessionToken,
        place_id: &PlaceId,
    ) -> Result<Place, FetchError> {
        self.record(ApiCall::GetPlace {
            token: token.as_str().to_string(),
            place_id: place_id.clone(),
        });
        self.place.clone()
    }

    async fn submit_review(
        &self,
        _token: &SessionToken,
        place_id: &PlaceId,
        draft: &ReviewDraft,
    ) -> Result<(), SubmitError> {
        self.record(ApiCall::SubmitReview {
            place_id: place_id.clone(),
            draft: draft.clone(),
        });
        self.submit.clone()
    }
}

pub(crate) fn sample_place(id: &str, name: &str, country: &str) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        price: 100.0,
        city: "Capital".to_string(),
        country: country.to_string(),
        description: "A test listing".to_string(),
        host: "Host".to_string(),
        image: None,
        amenities: vec!["Wifi".to_string()],
        reviews: vec![Review {
            user: "Ana".to_string(),
            comment: "Great".to_string(),
            rating: 4,
        }],
    }
}
