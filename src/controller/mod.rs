//! Page controllers.
//!
//! Every user action becomes a [`Command`]; [`PageController::dispatch`] runs
//! it against the API and answers with the [`Effect`]s the page must apply.
//! The session is read once, when the controller is built for a page load.
pub mod command;
#[cfg(test)]
pub(crate) mod test_support;

use std::cell::RefCell;

use leptos::logging::{error, log, warn};

use crate::api::PlacesApi;
use crate::credentials::CredentialStore;
use crate::error::SubmitError;
use crate::models::place::PlaceId;
use crate::models::review::ReviewDraft;
use crate::models::session::{Session, SessionToken};
use crate::view::listing::{CountryFilter, PlaceListView};
use crate::view::render::{render_place_detail, render_reviews};

pub use command::{Command, Effect, MessageSlot, Page, Region};

pub struct PageController<A, S> {
    api: A,
    store: S,
    session: Session,
    listing: RefCell<Option<PlaceListView>>,
}

impl<A, S> PageController<A, S>
where
    A: PlacesApi,
    S: CredentialStore,
{
    pub fn new(api: A, store: S) -> Self {
        let session = Session::from_token(store.get_token());
        log!(
            "[SESSION] Page loaded, authenticated: {}",
            session.is_authenticated()
        );
        Self {
            api,
            store,
            session,
            listing: RefCell::new(None),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn dispatch(&self, command: Command) -> Vec<Effect> {
        match command {
            Command::Login { email, password } => self.login(&email, &password).await,
            Command::LoadListing => self.load_listing().await,
            Command::FilterByCountry(filter) => self.filter_listing(&filter),
            Command::LoadPlace { query } => self.load_place(&query).await,
            Command::SubmitReview {
                place_id,
                comment,
                rating,
            } => self.submit_review(&place_id, &comment, &rating).await,
        }
    }

    async fn login(&self, email: &str, password: &str) -> Vec<Effect> {
        match self.api.login(email, password).await {
            Ok(token) => {
                log!("[LOGIN] Login succeeded for {}", email);
                self.store.set_token(&token);
                vec![Effect::Navigate(Page::Index)]
            }
            Err(err) => {
                warn!("[LOGIN] Login failed for {}: {}", email, err);
                vec![Effect::InlineError(MessageSlot::Login, err.user_message())]
            }
        }
    }

    async fn load_listing(&self) -> Vec<Effect> {
        let Some(token) = self.session.token() else {
            return vec![Effect::ShowLoginLink(true)];
        };

        let mut effects = vec![Effect::ShowLoginLink(false)];
        match self.api.list_places(token).await {
            Ok(places) => {
                log!("[LISTING] Rendering {} places", places.len());
                let view = PlaceListView::new(&places);
                effects.push(Effect::CountryOptions(view.countries().to_vec()));
                effects.push(Effect::Render(Region::PlacesList, view.render()));
                *self.listing.borrow_mut() = Some(view);
            }
            Err(err) => {
                error!("[LISTING] Failed to fetch places: {}", err);
                effects.push(Effect::InlineError(
                    MessageSlot::PlacesList,
                    format!("Failed to load places: {}", err),
                ));
            }
        }
        effects
    }

    fn filter_listing(&self, filter: &CountryFilter) -> Vec<Effect> {
        let mut listing = self.listing.borrow_mut();
        let Some(view) = listing.as_mut() else {
            return Vec::new();
        };
        view.apply_filter(filter);
        log!("[LISTING] Filter {:?} shows {} places", filter, view.visible_count());
        vec![Effect::Render(Region::PlacesList, view.render())]
    }

    async fn load_place(&self, query: &str) -> Vec<Effect> {
        let Some(token) = self.session.token() else {
            log!("[PLACE] No session, redirecting to {}", Page::Index.href());
            return vec![Effect::Navigate(Page::Index)];
        };
        let Some(place_id) = PlaceId::from_query(query) else {
            warn!("[PLACE] No place id in query {:?}", query);
            return vec![Effect::InlineError(
                MessageSlot::PlaceDetails,
                "No place selected".to_string(),
            )];
        };
        self.fetch_place(token, &place_id).await
    }

    async fn fetch_place(&self, token: &SessionToken, place_id: &PlaceId) -> Vec<Effect> {
        match self.api.get_place_details(token, place_id).await {
            Ok(place) => vec![
                Effect::Render(Region::PlaceDetails, render_place_detail(&place)),
                Effect::Render(Region::Reviews, render_reviews(&place.reviews)),
            ],
            Err(err) => {
                error!("[PLACE] Failed to fetch place {}: {}", place_id, err);
                vec![Effect::InlineError(
                    MessageSlot::PlaceDetails,
                    format!("Failed to load place details: {}", err),
                )]
            }
        }
    }

    async fn submit_review(&self, place_id: &PlaceId, comment: &str, rating: &str) -> Vec<Effect> {
        let Some(token) = self.session.token() else {
            return vec![Effect::Alert(
                "You must be logged in to submit a review".to_string(),
            )];
        };
        let draft = match ReviewDraft::new(comment, rating).map_err(SubmitError::from) {
            Ok(draft) => draft,
            Err(err) => {
                warn!("[REVIEW] Rejected review input: {}", err);
                return vec![Effect::Alert(err.to_string())];
            }
        };

        match self.api.submit_review(token, place_id, &draft).await {
            Ok(()) => {
                log!("[REVIEW] Review stored for place {}", place_id);
                let mut effects = vec![Effect::ClearReviewForm];
                effects.extend(self.fetch_place(token, place_id).await);
                effects
            }
            Err(err) => {
                warn!("[REVIEW] Submission for place {} failed: {}", place_id, err);
                vec![Effect::Alert(err.to_string())]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{ApiCall, RecordingApi};
    use super::*;
    use crate::credentials::MemoryStore;
    use crate::error::{AuthError, FetchError};
    use leptos::logging::log;

    fn authenticated() -> MemoryStore {
        MemoryStore::with_token(SessionToken::new("page-token"))
    }

    fn rendered(effects: &[Effect], region: Region) -> Option<&crate::view::Node> {
        effects.iter().find_map(|effect| match effect {
            Effect::Render(r, node) if *r == region => Some(node),
            _ => None,
        })
    }

    fn place_query(id: &str) -> Command {
        Command::LoadPlace {
            query: format!("?id={id}"),
        }
    }

    #[tokio::test]
    async fn test_login_success_stores_token_and_navigates() {
        log!("[TEST] Starting test_login_success_stores_token_and_navigates");
        let api = RecordingApi::new();
        let store = MemoryStore::default();
        let controller = PageController::new(api.clone(), store.clone());

        let effects = controller
            .dispatch(Command::Login {
                email: "user@example.com".into(),
                password: "pw".into(),
            })
            .await;

        assert_eq!(effects, vec![Effect::Navigate(Page::Index)]);
        assert_eq!(store.get_token(), Some(SessionToken::new("issued-token")));
    }

    #[tokio::test]
    async fn test_rejected_login_stores_nothing_and_stays_anonymous() {
        let mut api = RecordingApi::new();
        api.login = Err(AuthError::Rejected {
            message: "Invalid credentials".into(),
        });
        let store = MemoryStore::default();
        let login_page = PageController::new(api.clone(), store.clone());

        let effects = login_page
            .dispatch(Command::Login {
                email: "user@example.com".into(),
                password: "wrong".into(),
            })
            .await;

        assert_eq!(
            effects,
            vec![Effect::InlineError(
                MessageSlot::Login,
                "Login failed: Invalid credentials".into()
            )]
        );
        assert_eq!(store.get_token(), None);

        let listing_page = PageController::new(api.clone(), store);
        assert_eq!(listing_page.session(), &Session::Anonymous);
        let effects = listing_page.dispatch(Command::LoadListing).await;
        assert_eq!(effects, vec![Effect::ShowLoginLink(true)]);
        assert!(!api
            .calls()
            .iter()
            .any(|call| matches!(call, ApiCall::ListPlaces { .. })));
    }

    #[tokio::test]
    async fn test_login_transport_failure_uses_generic_message() {
        let mut api = RecordingApi::new();
        api.login = Err(AuthError::Transport("connection refused".into()));
        let controller = PageController::new(api, MemoryStore::default());

        let effects = controller
            .dispatch(Command::Login {
                email: "a@b.c".into(),
                password: "pw".into(),
            })
            .await;

        assert_eq!(
            effects,
            vec![Effect::InlineError(
                MessageSlot::Login,
                "An error occurred. Please try again.".into()
            )]
        );
    }

    #[tokio::test]
    async fn test_listing_renders_places_with_session_token() {
        let api = RecordingApi::new();
        let controller = PageController::new(api.clone(), authenticated());

        let effects = controller.dispatch(Command::LoadListing).await;

        assert_eq!(effects[0], Effect::ShowLoginLink(false));
        assert!(effects.contains(&Effect::CountryOptions(vec![
            "France".into(),
            "USA".into()
        ])));
        let list = rendered(&effects, Region::PlacesList).unwrap();
        assert_eq!(list.find_by_class("place-card").len(), 2);
        assert_eq!(
            api.calls(),
            vec![ApiCall::ListPlaces {
                token: "page-token".into()
            }]
        );
    }

    #[tokio::test]
    async fn test_listing_fetch_failure_is_shown_inline() {
        let mut api = RecordingApi::new();
        api.places = Err(FetchError::Status { status_code: 500 });
        let controller = PageController::new(api, authenticated());

        let effects = controller.dispatch(Command::LoadListing).await;

        assert_eq!(
            effects.last(),
            Some(&Effect::InlineError(
                MessageSlot::PlacesList,
                "Failed to load places: server responded with HTTP 500".into()
            ))
        );
    }

    #[tokio::test]
    async fn test_country_filter_reuses_rendered_listing() {
        let api = RecordingApi::new();
        let controller = PageController::new(api.clone(), authenticated());
        controller.dispatch(Command::LoadListing).await;

        let effects = controller
            .dispatch(Command::FilterByCountry(CountryFilter::from_selection("France")))
            .await;
        let list = rendered(&effects, Region::PlacesList).unwrap();
        let hidden: Vec<bool> = list
            .find_by_class("place-card")
            .iter()
            .map(|card| card.is_hidden())
            .collect();
        assert_eq!(hidden, vec![true, false]);

        let effects = controller
            .dispatch(Command::FilterByCountry(CountryFilter::All))
            .await;
        let list = rendered(&effects, Region::PlacesList).unwrap();
        assert!(list.find_by_class("place-card").iter().all(|c| !c.is_hidden()));

        assert_eq!(api.calls().len(), 1, "filtering must not re-fetch");
    }

    #[tokio::test]
    async fn test_filter_before_listing_is_a_no_op() {
        let controller = PageController::new(RecordingApi::new(), authenticated());
        let effects = controller
            .dispatch(Command::FilterByCountry(CountryFilter::All))
            .await;
        assert!(effects.is_empty());
    }

    #[tokio::test]
    async fn test_anonymous_place_load_redirects_without_api_call() {
        let api = RecordingApi::new();
        let controller = PageController::new(api.clone(), MemoryStore::default());

        let effects = controller.dispatch(place_query("2")).await;

        assert_eq!(effects, vec![Effect::Navigate(Page::Index)]);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_place_load_renders_details_and_reviews() {
        let api = RecordingApi::new();
        let controller = PageController::new(api.clone(), authenticated());

        let effects = controller.dispatch(place_query("2")).await;

        let details = rendered(&effects, Region::PlaceDetails).unwrap();
        assert!(details.text_content().contains("Loft"));
        let reviews = rendered(&effects, Region::Reviews).unwrap();
        assert_eq!(reviews.find_by_class("review-card").len(), 1);
        assert_eq!(
            api.calls(),
            vec![ApiCall::GetPlace {
                token: "page-token".into(),
                place_id: PlaceId::new("2").unwrap()
            }]
        );
    }

    #[tokio::test]
    async fn test_place_load_without_id_makes_no_call() {
        let api = RecordingApi::new();
        let controller = PageController::new(api.clone(), authenticated());

        let effects = controller
            .dispatch(Command::LoadPlace { query: "?id=".into() })
            .await;

        assert_eq!(
            effects,
            vec![Effect::InlineError(
                MessageSlot::PlaceDetails,
                "No place selected".into()
            )]
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_review_success_clears_form_and_refetches_once() {
        let api = RecordingApi::new();
        let controller = PageController::new(api.clone(), authenticated());
        let place_id = PlaceId::new("2").unwrap();

        let effects = controller
            .dispatch(Command::SubmitReview {
                place_id: place_id.clone(),
                comment: "Spotless".into(),
                rating: "5".into(),
            })
            .await;

        assert_eq!(effects[0], Effect::ClearReviewForm);
        assert!(rendered(&effects, Region::Reviews).is_some());

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0],
            ApiCall::SubmitReview {
                place_id: place_id.clone(),
                draft: ReviewDraft::new("Spotless", "5").unwrap()
            }
        );
        let refetches: Vec<&ApiCall> = calls
            .iter()
            .filter(|call| matches!(call, ApiCall::GetPlace { place_id: id, .. } if *id == place_id))
            .collect();
        assert_eq!(refetches.len(), 1);
    }

    #[tokio::test]
    async fn test_review_failure_alerts_and_keeps_form() {
        let mut api = RecordingApi::new();
        api.submit = Err(SubmitError::Rejected {
            message: "Already reviewed".into(),
        });
        let controller = PageController::new(api.clone(), authenticated());

        let effects = controller
            .dispatch(Command::SubmitReview {
                place_id: PlaceId::new("2").unwrap(),
                comment: "Again".into(),
                rating: "3".into(),
            })
            .await;

        assert_eq!(
            effects,
            vec![Effect::Alert(
                "Failed to submit review: Already reviewed".into()
            )]
        );
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_review_never_reaches_api() {
        let api = RecordingApi::new();
        let controller = PageController::new(api.clone(), authenticated());

        let effects = controller
            .dispatch(Command::SubmitReview {
                place_id: PlaceId::new("2").unwrap(),
                comment: "Fine".into(),
                rating: "7".into(),
            })
            .await;

        assert!(matches!(effects.as_slice(), [Effect::Alert(_)]));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_anonymous_review_is_refused() {
        let api = RecordingApi::new();
        let controller = PageController::new(api.clone(), MemoryStore::default());

        let effects = controller
            .dispatch(Command::SubmitReview {
                place_id: PlaceId::new("2").unwrap(),
                comment: "Fine".into(),
                rating: "4".into(),
            })
            .await;

        assert!(matches!(effects.as_slice(), [Effect::Alert(_)]));
        assert!(api.calls().is_empty());
    }
}
