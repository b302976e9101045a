mod dashboard;
mod listings;
mod login;
mod users;

use actix_web::HttpResponse;

use crate::domain::PageId;
use crate::startup::ApiBaseUrl;

pub use dashboard::admin_dashboard;
pub use listings::listings_page;
pub use login::login_form;
pub use users::users_page;

pub fn render_page(page: PageId, api: &ApiBaseUrl) -> HttpResponse {
    match page {
        PageId::Login => login_form(api),
        PageId::Dashboard => admin_dashboard(),
        PageId::Users => users_page(api),
        PageId::Listings => listings_page(api),
    }
}
