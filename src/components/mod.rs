pub mod login_form;
pub mod page_view;
pub mod place_details;
pub mod places_list;
pub mod render_tree;
pub mod review_form;
pub mod reviews_list;
