mod compose;
pub use compose::compose_page;

mod home;
pub use home::home_page;

mod login;
pub use login::login_page;

mod users;
pub use users::users_page;
