pub use super::assignments::Entity as Assignments;
pub use super::events::Entity as Events;
pub use super::papers::Entity as Papers;
pub use super::reviews::Entity as Reviews;
pub use super::users::Entity as Users;
