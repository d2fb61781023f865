//! Domain methods for the Shopdesk API client, one module per resource
//! family. Response types come from `shopdesk_core::models`.

mod catalog;
mod combos;
mod dealers;
mod orders;
mod products;
mod promotions;
mod users;
