//! Shopdesk CLI — back-office client for the Shopdesk API.
//!
//! Set SHOPDESK_API_URL (and optionally SHOPDESK_API_TOKEN; `shopdesk login`
//! stores a token otherwise). Every command talks to the backend through the
//! shared API client.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;

use shopdesk_api_client::ApiClient;
use shopdesk_cli::{init_tracing, parse_discount_kind, parse_move, read_upload};
use shopdesk_core::labels::render_labels;
use shopdesk_core::media::{DragSession, InMemoryPreviewStore, MediaCollection, PreviewStore};
use shopdesk_core::models::{
    ComboDraft, ComboProduct, CouponDraft, FlashSaleDraft, FlashSaleItem, OfferDraft, OrderStatus,
    PageQuery, Product, ProductDraft,
};
use shopdesk_core::{AdminConfig, AppError, LogLevel, NoticeMetadata, SessionStore};

#[derive(Parser)]
#[command(name = "shopdesk", about = "Shopdesk back-office CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store the API token used by subsequent commands
    Login {
        /// Bearer token issued by the backend
        token: String,
    },
    /// Forget the stored API token
    Logout,
    /// Product catalog
    Product {
        #[command(subcommand)]
        sub: ProductCommands,
    },
    /// Combo products
    Combo {
        #[command(subcommand)]
        sub: ComboCommands,
    },
    /// Orders, shipping approval, label printing
    Order {
        #[command(subcommand)]
        sub: OrderCommands,
    },
    /// Coupon codes
    Coupon {
        #[command(subcommand)]
        sub: CouponCommands,
    },
    /// Timed offers
    Offer {
        #[command(subcommand)]
        sub: OfferCommands,
    },
    /// Flash sales
    FlashSale {
        #[command(subcommand)]
        sub: FlashSaleCommands,
    },
    /// Dealers and their rates
    Dealer {
        #[command(subcommand)]
        sub: DealerCommands,
    },
    /// User accounts
    User {
        #[command(subcommand)]
        sub: UserCommands,
    },
    /// Review moderation
    Review {
        #[command(subcommand)]
        sub: ReviewCommands,
    },
    /// Catalog vocabularies (sizes, variants, categories, keywords, fields)
    Catalog {
        #[command(subcommand)]
        sub: CatalogCommands,
    },
}

#[derive(Subcommand)]
enum ProductCommands {
    /// List products
    List {
        #[arg(long, default_value = "1")]
        page: u32,
        /// Page size; remembered for this screen when given
        #[arg(long)]
        per_page: Option<u32>,
        /// Filter by name
        #[arg(long)]
        search: Option<String>,
    },
    /// Get a single product
    Get { id: i64 },
    /// Create a product
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: Decimal,
        #[arg(long, default_value = "0")]
        quantity: i32,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        discount_price: Option<Decimal>,
        #[arg(long)]
        dealer_price: Option<Decimal>,
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        published: bool,
        /// Size id; repeat for several
        #[arg(long = "size")]
        sizes: Vec<i64>,
        /// Variant id; repeat for several
        #[arg(long = "variant")]
        variants: Vec<i64>,
        /// Keyword id; repeat for several
        #[arg(long = "keyword")]
        keywords: Vec<i64>,
        /// Image file to upload; repeat for several, listed order is kept
        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },
    /// Update a product and its media grid
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<Decimal>,
        #[arg(long)]
        quantity: Option<i32>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        published: Option<bool>,
        /// Image file to append to the media grid; repeatable
        #[arg(long = "add-image")]
        add_images: Vec<PathBuf>,
        /// Asset id to remove from the media grid; repeatable
        #[arg(long = "remove-media")]
        remove_media: Vec<i64>,
        /// Reposition media as from:to (zero-based); repeatable, applied in order
        #[arg(long = "move")]
        moves: Vec<String>,
    },
    /// Delete a product
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum ComboCommands {
    List {
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long)]
        per_page: Option<u32>,
    },
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: Decimal,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        discount_price: Option<Decimal>,
        #[arg(long)]
        published: bool,
        /// Product id included in the bundle; repeat for several
        #[arg(long = "product", required = true)]
        products: Vec<i64>,
        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },
    /// Update a combo and its media grid
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<Decimal>,
        #[arg(long)]
        published: Option<bool>,
        #[arg(long = "add-image")]
        add_images: Vec<PathBuf>,
        #[arg(long = "remove-media")]
        remove_media: Vec<i64>,
        #[arg(long = "move")]
        moves: Vec<String>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
enum OrderCommands {
    List {
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long)]
        per_page: Option<u32>,
        /// Filter: pending, processing, shipped, delivered, cancelled
        #[arg(long)]
        status: Option<String>,
    },
    Get {
        id: i64,
    },
    /// Approve an order for shipping
    ApproveShipping {
        id: i64,
    },
    /// Assemble a printable label document for the given orders
    Labels {
        /// Order ids, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<i64>,
        /// Output HTML file
        #[arg(long, default_value = "labels.html")]
        out: PathBuf,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
enum CouponCommands {
    List {
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long)]
        per_page: Option<u32>,
    },
    Create {
        #[arg(long)]
        code: String,
        /// percent or fixed
        #[arg(long)]
        kind: String,
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        min_spend: Option<Decimal>,
        #[arg(long)]
        usage_limit: Option<u32>,
        /// RFC 3339 timestamp; defaults to now
        #[arg(long)]
        starts_at: Option<chrono::DateTime<chrono::Utc>>,
        #[arg(long)]
        expires_at: Option<chrono::DateTime<chrono::Utc>>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
enum OfferCommands {
    List {
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long)]
        per_page: Option<u32>,
    },
    Create {
        #[arg(long)]
        title: String,
        /// percent or fixed
        #[arg(long)]
        kind: String,
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        starts_at: chrono::DateTime<chrono::Utc>,
        #[arg(long)]
        ends_at: chrono::DateTime<chrono::Utc>,
        /// Product id covered by the offer; repeat for several
        #[arg(long = "product")]
        products: Vec<i64>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
enum FlashSaleCommands {
    List {
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long)]
        per_page: Option<u32>,
    },
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        starts_at: chrono::DateTime<chrono::Utc>,
        #[arg(long)]
        ends_at: chrono::DateTime<chrono::Utc>,
        /// product_id:sale_price pair; repeat for several
        #[arg(long = "item", required = true)]
        items: Vec<String>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
enum DealerCommands {
    List {
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long)]
        per_page: Option<u32>,
    },
    Get {
        id: i64,
    },
    /// Update a dealer's rate
    SetRate {
        id: i64,
        #[arg(long)]
        rate: Decimal,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    List {
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long)]
        per_page: Option<u32>,
    },
    Get {
        id: i64,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
enum ReviewCommands {
    List {
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long)]
        per_page: Option<u32>,
        /// Only reviews awaiting moderation
        #[arg(long)]
        pending: bool,
    },
    Approve {
        id: i64,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
enum CatalogCommands {
    Size {
        #[command(subcommand)]
        sub: VocabCommands,
    },
    Variant {
        #[command(subcommand)]
        sub: VocabCommands,
    },
    Category {
        #[command(subcommand)]
        sub: CategoryCommands,
    },
    Keyword {
        #[command(subcommand)]
        sub: VocabCommands,
    },
    Field {
        #[command(subcommand)]
        sub: VocabCommands,
    },
}

#[derive(Subcommand)]
enum VocabCommands {
    List,
    Create { name: String },
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum CategoryCommands {
    List,
    Create {
        name: String,
        #[arg(long)]
        parent: Option<i64>,
    },
    Delete {
        id: i64,
    },
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

/// Log an error at its declared level and keep only the operator notice.
fn surface(err: AppError) -> anyhow::Error {
    match err.log_level() {
        LogLevel::Debug => tracing::debug!(error = %err, "operation failed"),
        LogLevel::Warn => tracing::warn!(error = %err, "operation failed"),
        LogLevel::Error => tracing::error!(error = %err, "operation failed"),
    }
    anyhow::anyhow!("{}", err.notice())
}

/// Page size for a list screen: an explicit --per-page is remembered for the
/// screen, otherwise the remembered (or default) size applies.
fn resolve_page_size(
    session: &mut SessionStore,
    screen: &str,
    per_page: Option<u32>,
    default: u32,
) -> Result<u32> {
    match per_page {
        Some(size) => {
            session.remember_page_size(screen, size);
            session.save().map_err(surface)?;
            Ok(size)
        }
        None => Ok(session.page_size_for(screen, default)),
    }
}

fn parse_order_status(raw: &str) -> Result<OrderStatus> {
    match raw.to_ascii_lowercase().as_str() {
        "pending" => Ok(OrderStatus::Pending),
        "processing" => Ok(OrderStatus::Processing),
        "shipped" => Ok(OrderStatus::Shipped),
        "delivered" => Ok(OrderStatus::Delivered),
        "cancelled" => Ok(OrderStatus::Cancelled),
        other => bail!("Unknown order status '{}'", other),
    }
}

fn parse_sale_item(raw: &str) -> Result<FlashSaleItem> {
    let Some((product_id, sale_price)) = raw.split_once(':') else {
        bail!("Expected product_id:sale_price, got '{}'", raw);
    };
    Ok(FlashSaleItem {
        product_id: product_id
            .trim()
            .parse()
            .with_context(|| format!("Invalid product id '{}'", product_id))?,
        sale_price: sale_price
            .trim()
            .parse()
            .with_context(|| format!("Invalid sale price '{}'", sale_price))?,
    })
}

fn draft_from_product(product: &Product) -> ProductDraft {
    ProductDraft {
        name: product.name.clone(),
        description: product.description.clone(),
        price: product.price,
        discount_price: product.discount_price,
        dealer_price: product.dealer_price,
        quantity: product.quantity,
        published: product.published,
        category_id: product.category_id,
        size_ids: product.sizes.iter().map(|s| s.id).collect(),
        variant_ids: product.variants.iter().map(|v| v.id).collect(),
        keyword_ids: product.keywords.iter().map(|k| k.id).collect(),
    }
}

fn draft_from_combo(combo: &ComboProduct) -> ComboDraft {
    ComboDraft {
        name: combo.name.clone(),
        description: combo.description.clone(),
        price: combo.price,
        discount_price: combo.discount_price,
        published: combo.published,
        product_ids: combo.product_ids.clone(),
    }
}

/// Build a fresh collection holding the given image files, reporting one
/// aggregate notice for any rejected file.
fn collection_from_files(images: &[PathBuf]) -> Result<MediaCollection> {
    let previews: Arc<dyn PreviewStore> = Arc::new(InMemoryPreviewStore::new());
    let mut media = MediaCollection::new(previews);
    add_images(&mut media, images)?;
    Ok(media)
}

fn add_images(media: &mut MediaCollection, images: &[PathBuf]) -> Result<()> {
    let mut files = Vec::with_capacity(images.len());
    for path in images {
        files.push(read_upload(path)?);
    }
    let outcome = media.add_files(files);
    if let Some(notice) = outcome.notice() {
        eprintln!("{}", notice);
    }
    Ok(())
}

/// Apply the media-grid edits of an update command: append new uploads,
/// remove assets, then replay position moves through the drag session.
fn apply_media_edits(
    media: &mut MediaCollection,
    add_images_args: &[PathBuf],
    remove_media: &[i64],
    moves: &[String],
) -> Result<()> {
    add_images(media, add_images_args)?;

    for asset_id in remove_media.iter().copied() {
        match media.asset_key(asset_id) {
            Some(key) => media.remove(&key),
            None => tracing::warn!(asset_id, "asset not on this record, skipping removal"),
        }
    }

    let mut drag = DragSession::new();
    for raw in moves {
        let (from, to) = parse_move(raw)?;
        let (Some(from_key), Some(to_key)) = (media.key_at(from), media.key_at(to)) else {
            bail!(
                "Move {} is out of range (the grid has {} items)",
                raw,
                media.len()
            );
        };
        drag.begin(&from_key, media);
        drag.drop_on(&to_key, media);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let config = AdminConfig::from_env().map_err(surface)?;
    let mut session = SessionStore::load(&config.session_path).map_err(surface)?;

    let cli = Cli::parse();

    // Login and logout only touch the local session
    match &cli.command {
        Commands::Login { token } => {
            session.set_token(token.clone());
            session.save().map_err(surface)?;
            println!("Token stored");
            return Ok(());
        }
        Commands::Logout => {
            session.clear_token();
            session.save().map_err(surface)?;
            println!("Token cleared");
            return Ok(());
        }
        _ => {}
    }

    let client = ApiClient::from_config(&config, &session)?;
    let default_page_size = config.default_page_size;

    match cli.command {
        Commands::Login { .. } | Commands::Logout => unreachable!("handled above"),

        Commands::Product { sub } => match sub {
            ProductCommands::List {
                page,
                per_page,
                search,
            } => {
                let size = resolve_page_size(&mut session, "products", per_page, default_page_size)?;
                let response = client
                    .list_products(PageQuery::new(page, size), search.as_deref())
                    .await?;
                print_json(&response)?;
            }
            ProductCommands::Get { id } => {
                let response = client.get_product(id).await?;
                print_json(&response)?;
            }
            ProductCommands::Create {
                name,
                price,
                quantity,
                description,
                discount_price,
                dealer_price,
                category,
                published,
                sizes,
                variants,
                keywords,
                images,
            } => {
                let draft = ProductDraft {
                    name,
                    description,
                    price,
                    discount_price,
                    dealer_price,
                    quantity,
                    published,
                    category_id: category,
                    size_ids: sizes,
                    variant_ids: variants,
                    keyword_ids: keywords,
                };
                let mut media = collection_from_files(&images)?;
                let response = client.create_product(&draft, &media.save_payload()).await?;
                media.dispose();
                print_json(&response)?;
            }
            ProductCommands::Update {
                id,
                name,
                price,
                quantity,
                description,
                published,
                add_images: add_images_args,
                remove_media,
                moves,
            } => {
                let product = client.get_product(id).await?;
                let mut draft = draft_from_product(&product);
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(price) = price {
                    draft.price = price;
                }
                if let Some(quantity) = quantity {
                    draft.quantity = quantity;
                }
                if let Some(description) = description {
                    draft.description = Some(description);
                }
                if let Some(published) = published {
                    draft.published = published;
                }

                let previews: Arc<dyn PreviewStore> = Arc::new(InMemoryPreviewStore::new());
                let mut media = MediaCollection::from_existing(previews, &product.media);
                apply_media_edits(&mut media, &add_images_args, &remove_media, &moves)?;

                let response = client.update_product(id, &draft, &media.save_payload()).await?;
                media.dispose();
                print_json(&response)?;
            }
            ProductCommands::Delete { id } => {
                client.delete_product(id).await?;
                print_json(&serde_json::json!({ "deleted": id }))?;
            }
        },

        Commands::Combo { sub } => match sub {
            ComboCommands::List { page, per_page } => {
                let size = resolve_page_size(&mut session, "combos", per_page, default_page_size)?;
                let response = client.list_combos(PageQuery::new(page, size)).await?;
                print_json(&response)?;
            }
            ComboCommands::Get { id } => {
                let response = client.get_combo(id).await?;
                print_json(&response)?;
            }
            ComboCommands::Create {
                name,
                price,
                description,
                discount_price,
                published,
                products,
                images,
            } => {
                let draft = ComboDraft {
                    name,
                    description,
                    price,
                    discount_price,
                    published,
                    product_ids: products,
                };
                let mut media = collection_from_files(&images)?;
                let response = client.create_combo(&draft, &media.save_payload()).await?;
                media.dispose();
                print_json(&response)?;
            }
            ComboCommands::Update {
                id,
                name,
                price,
                published,
                add_images: add_images_args,
                remove_media,
                moves,
            } => {
                let combo = client.get_combo(id).await?;
                let mut draft = draft_from_combo(&combo);
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(price) = price {
                    draft.price = price;
                }
                if let Some(published) = published {
                    draft.published = published;
                }

                let previews: Arc<dyn PreviewStore> = Arc::new(InMemoryPreviewStore::new());
                let mut media = MediaCollection::from_existing(previews, &combo.media);
                apply_media_edits(&mut media, &add_images_args, &remove_media, &moves)?;

                let response = client.update_combo(id, &draft, &media.save_payload()).await?;
                media.dispose();
                print_json(&response)?;
            }
            ComboCommands::Delete { id } => {
                client.delete_combo(id).await?;
                print_json(&serde_json::json!({ "deleted": id }))?;
            }
        },

        Commands::Order { sub } => match sub {
            OrderCommands::List {
                page,
                per_page,
                status,
            } => {
                let size = resolve_page_size(&mut session, "orders", per_page, default_page_size)?;
                let status = status.as_deref().map(parse_order_status).transpose()?;
                let response = client.list_orders(PageQuery::new(page, size), status).await?;
                print_json(&response)?;
            }
            OrderCommands::Get { id } => {
                let response = client.get_order(id).await?;
                print_json(&response)?;
            }
            OrderCommands::ApproveShipping { id } => {
                let response = client.approve_shipping(id).await?;
                print_json(&response)?;
            }
            OrderCommands::Labels { ids, out } => {
                let orders = client.get_orders(&ids).await?;
                let document = render_labels(&orders).map_err(surface)?;
                std::fs::write(&out, document)
                    .with_context(|| format!("Failed to write {}", out.display()))?;
                println!("Wrote {} label(s) to {}", orders.len(), out.display());
            }
            OrderCommands::Delete { id } => {
                client.delete_order(id).await?;
                print_json(&serde_json::json!({ "deleted": id }))?;
            }
        },

        Commands::Coupon { sub } => match sub {
            CouponCommands::List { page, per_page } => {
                let size = resolve_page_size(&mut session, "coupons", per_page, default_page_size)?;
                let response = client.list_coupons(PageQuery::new(page, size)).await?;
                print_json(&response)?;
            }
            CouponCommands::Create {
                code,
                kind,
                amount,
                min_spend,
                usage_limit,
                starts_at,
                expires_at,
            } => {
                let draft = CouponDraft {
                    code,
                    kind: parse_discount_kind(&kind)?,
                    amount,
                    min_spend,
                    usage_limit,
                    starts_at: starts_at.unwrap_or_else(chrono::Utc::now),
                    expires_at,
                };
                let response = client.create_coupon(&draft).await?;
                print_json(&response)?;
            }
            CouponCommands::Delete { id } => {
                client.delete_coupon(id).await?;
                print_json(&serde_json::json!({ "deleted": id }))?;
            }
        },

        Commands::Offer { sub } => match sub {
            OfferCommands::List { page, per_page } => {
                let size = resolve_page_size(&mut session, "offers", per_page, default_page_size)?;
                let response = client.list_offers(PageQuery::new(page, size)).await?;
                print_json(&response)?;
            }
            OfferCommands::Create {
                title,
                kind,
                amount,
                starts_at,
                ends_at,
                products,
            } => {
                let draft = OfferDraft {
                    title,
                    kind: parse_discount_kind(&kind)?,
                    amount,
                    starts_at,
                    ends_at,
                    product_ids: products,
                };
                let response = client.create_offer(&draft).await?;
                print_json(&response)?;
            }
            OfferCommands::Delete { id } => {
                client.delete_offer(id).await?;
                print_json(&serde_json::json!({ "deleted": id }))?;
            }
        },

        Commands::FlashSale { sub } => match sub {
            FlashSaleCommands::List { page, per_page } => {
                let size =
                    resolve_page_size(&mut session, "flash-sales", per_page, default_page_size)?;
                let response = client.list_flash_sales(PageQuery::new(page, size)).await?;
                print_json(&response)?;
            }
            FlashSaleCommands::Create {
                title,
                starts_at,
                ends_at,
                items,
            } => {
                let items = items
                    .iter()
                    .map(|raw| parse_sale_item(raw))
                    .collect::<Result<Vec<_>>>()?;
                let draft = FlashSaleDraft {
                    title,
                    starts_at,
                    ends_at,
                    items,
                };
                let response = client.create_flash_sale(&draft).await?;
                print_json(&response)?;
            }
            FlashSaleCommands::Delete { id } => {
                client.delete_flash_sale(id).await?;
                print_json(&serde_json::json!({ "deleted": id }))?;
            }
        },

        Commands::Dealer { sub } => match sub {
            DealerCommands::List { page, per_page } => {
                let size = resolve_page_size(&mut session, "dealers", per_page, default_page_size)?;
                let response = client.list_dealers(PageQuery::new(page, size)).await?;
                print_json(&response)?;
            }
            DealerCommands::Get { id } => {
                let response = client.get_dealer(id).await?;
                print_json(&response)?;
            }
            DealerCommands::SetRate { id, rate } => {
                let response = client.update_dealer_rate(id, rate).await?;
                print_json(&response)?;
            }
        },

        Commands::User { sub } => match sub {
            UserCommands::List { page, per_page } => {
                let size = resolve_page_size(&mut session, "users", per_page, default_page_size)?;
                let response = client.list_users(PageQuery::new(page, size)).await?;
                print_json(&response)?;
            }
            UserCommands::Get { id } => {
                let response = client.get_user(id).await?;
                print_json(&response)?;
            }
            UserCommands::Delete { id } => {
                client.delete_user(id).await?;
                print_json(&serde_json::json!({ "deleted": id }))?;
            }
        },

        Commands::Review { sub } => match sub {
            ReviewCommands::List {
                page,
                per_page,
                pending,
            } => {
                let size = resolve_page_size(&mut session, "reviews", per_page, default_page_size)?;
                let response = client.list_reviews(PageQuery::new(page, size), pending).await?;
                print_json(&response)?;
            }
            ReviewCommands::Approve { id } => {
                let response = client.approve_review(id).await?;
                print_json(&response)?;
            }
            ReviewCommands::Delete { id } => {
                client.delete_review(id).await?;
                print_json(&serde_json::json!({ "deleted": id }))?;
            }
        },

        Commands::Catalog { sub } => match sub {
            CatalogCommands::Size { sub } => match sub {
                VocabCommands::List => print_json(&client.list_sizes().await?)?,
                VocabCommands::Create { name } => print_json(&client.create_size(&name).await?)?,
                VocabCommands::Delete { id } => {
                    client.delete_size(id).await?;
                    print_json(&serde_json::json!({ "deleted": id }))?;
                }
            },
            CatalogCommands::Variant { sub } => match sub {
                VocabCommands::List => print_json(&client.list_variants().await?)?,
                VocabCommands::Create { name } => print_json(&client.create_variant(&name).await?)?,
                VocabCommands::Delete { id } => {
                    client.delete_variant(id).await?;
                    print_json(&serde_json::json!({ "deleted": id }))?;
                }
            },
            CatalogCommands::Category { sub } => match sub {
                CategoryCommands::List => print_json(&client.list_categories().await?)?,
                CategoryCommands::Create { name, parent } => {
                    print_json(&client.create_category(&name, parent).await?)?
                }
                CategoryCommands::Delete { id } => {
                    client.delete_category(id).await?;
                    print_json(&serde_json::json!({ "deleted": id }))?;
                }
            },
            CatalogCommands::Keyword { sub } => match sub {
                VocabCommands::List => print_json(&client.list_keywords().await?)?,
                VocabCommands::Create { name } => print_json(&client.create_keyword(&name).await?)?,
                VocabCommands::Delete { id } => {
                    client.delete_keyword(id).await?;
                    print_json(&serde_json::json!({ "deleted": id }))?;
                }
            },
            CatalogCommands::Field { sub } => match sub {
                VocabCommands::List => print_json(&client.list_product_fields().await?)?,
                VocabCommands::Create { name } => {
                    print_json(&client.create_product_field(&name).await?)?
                }
                VocabCommands::Delete { id } => {
                    client.delete_product_field(id).await?;
                    print_json(&serde_json::json!({ "deleted": id }))?;
                }
            },
        },
    }

    Ok(())
}
