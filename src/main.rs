use std::path::Path;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};

use cafe_kiosk_client::models::{MenuItem, Order, PaymentResponse};
use cafe_kiosk_client::utils::{current_timestamp, format_currency, parse_wire_date};
use cafe_kiosk_client::{
    Cart, Config, ImageUpload, KioskApi, MenuForm, PeriodFilter, SortField, SortOrder, routes,
};

#[derive(Parser)]
#[command(name = "kiosk")]
#[command(about = "command-line client for the cafe kiosk backend", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management
    #[command(arg_required_else_help = true)]
    Category(CategoryArgs),
    /// Menu management
    #[command(arg_required_else_help = true)]
    Menu(MenuArgs),
    /// Order lookups
    #[command(arg_required_else_help = true)]
    Order(OrderArgs),
    /// Pay for a cart and submit it as an order
    #[command(arg_required_else_help = true)]
    Checkout(CheckoutArgs),
    /// Show which view a client-side path resolves to
    Resolve { path: String },
}

#[derive(Debug, Args)]
struct CategoryArgs {
    #[command(subcommand)]
    command: CategoryCmds,
}

#[derive(Debug, Subcommand)]
enum CategoryCmds {
    List,
    Get { id: u32 },
    /// List the menus of one category
    Menus { id: u32 },
    Add { name: String },
    Rename { id: u32, name: String },
    Remove { id: u32 },
}

#[derive(Debug, Args)]
struct MenuArgs {
    #[command(subcommand)]
    command: MenuCmds,
}

#[derive(Debug, Subcommand)]
enum MenuCmds {
    List {
        #[arg(long, help = "Only menus of this category")]
        category_id: Option<u32>,
    },
    Get {
        id: u32,
    },
    Add {
        #[arg(long)]
        category_id: u32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: i64,
        #[arg(long, help = "Path to an image file to upload")]
        image: Option<String>,
    },
    Update {
        id: u32,
        #[arg(long)]
        category_id: u32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: i64,
        #[arg(long, help = "Path to an image file to upload")]
        image: Option<String>,
    },
    Remove {
        id: u32,
    },
}

#[derive(Debug, Args)]
struct OrderArgs {
    #[command(subcommand)]
    command: OrderCmds,
}

#[derive(Debug, Subcommand)]
enum OrderCmds {
    List,
    Get {
        id: u32,
    },
    /// Orders within a date range, with optional filters
    Period {
        #[arg(help = "Start date, YYYY-MM-DD")]
        start: String,
        #[arg(help = "End date, YYYY-MM-DD")]
        end: String,
        #[arg(long)]
        min_amount: Option<i64>,
        #[arg(long)]
        max_amount: Option<i64>,
        #[arg(long)]
        menu_id: Option<u32>,
        #[arg(long)]
        category_id: Option<u32>,
        #[arg(long, value_enum)]
        sort_by: Option<SortByArg>,
        #[arg(long, value_enum)]
        order: Option<SortOrderArg>,
    },
}

#[derive(Debug, Args)]
struct CheckoutArgs {
    #[arg(
        required = true,
        value_name = "MENU_ID:QUANTITY",
        help = "Cart lines, e.g. 5:2 7:1"
    )]
    items: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortByArg {
    CreatedAt,
    UpdatedAt,
    TotalPrice,
}

impl From<SortByArg> for SortField {
    fn from(arg: SortByArg) -> Self {
        match arg {
            SortByArg::CreatedAt => SortField::CreatedAt,
            SortByArg::UpdatedAt => SortField::UpdatedAt,
            SortByArg::TotalPrice => SortField::TotalPrice,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortOrderArg {
    Asc,
    Desc,
}

impl From<SortOrderArg> for SortOrder {
    fn from(arg: SortOrderArg) -> Self {
        match arg {
            SortOrderArg::Asc => SortOrder::Asc,
            SortOrderArg::Desc => SortOrder::Desc,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::from_env().map_err(anyhow::Error::msg)?;
    log::debug!("using backend at {}", config.base_url);
    let api = KioskApi::new(&config)?;

    match cli.command {
        Commands::Category(args) => run_category(&api, args.command).await,
        Commands::Menu(args) => run_menu(&api, args.command).await,
        Commands::Order(args) => run_order(&api, args.command).await,
        Commands::Checkout(args) => run_checkout(&api, args).await,
        Commands::Resolve { path } => {
            run_resolve(&path);
            Ok(())
        }
    }
}

async fn run_category(api: &KioskApi, command: CategoryCmds) -> anyhow::Result<()> {
    match command {
        CategoryCmds::List => {
            for category in api.categories.get_all().await? {
                println!("{:>4}  {}", category.id, category.name);
            }
        }
        CategoryCmds::Get { id } => {
            let category = api.categories.get_by_id(id).await?;
            println!("{:>4}  {}  (created {})", category.id, category.name, category.created_at);
        }
        CategoryCmds::Menus { id } => {
            for menu in api.categories.get_menus(id).await? {
                print_menu(&menu);
            }
        }
        CategoryCmds::Add { name } => {
            let category = api.categories.create(&name).await?;
            println!("created category {} ({})", category.name, category.id);
        }
        CategoryCmds::Rename { id, name } => {
            let category = api.categories.update(id, &name).await?;
            println!("renamed category {} to {}", category.id, category.name);
        }
        CategoryCmds::Remove { id } => {
            let ack = api.categories.delete(id).await?;
            println!("{}", ack.message);
        }
    }
    Ok(())
}

async fn run_menu(api: &KioskApi, command: MenuCmds) -> anyhow::Result<()> {
    match command {
        MenuCmds::List { category_id } => {
            for menu in api.menus.get_menus(category_id).await? {
                print_menu(&menu);
            }
        }
        MenuCmds::Get { id } => {
            let menu = api.menus.get_menu(id).await?;
            print_menu(&menu);
        }
        MenuCmds::Add {
            category_id,
            name,
            price,
            image,
        } => {
            let form = menu_form(category_id, name, price, image)?;
            let menu = api.menus.create_menu(form).await?;
            println!("created menu {} ({})", menu.name, menu.id);
        }
        MenuCmds::Update {
            id,
            category_id,
            name,
            price,
            image,
        } => {
            let form = menu_form(category_id, name, price, image)?;
            let menu = api.menus.update_menu(id, form).await?;
            println!("updated menu {} ({})", menu.name, menu.id);
        }
        MenuCmds::Remove { id } => {
            let ack = api.menus.delete_menu(id).await?;
            println!("{}", ack.message);
        }
    }
    Ok(())
}

async fn run_order(api: &KioskApi, command: OrderCmds) -> anyhow::Result<()> {
    match command {
        OrderCmds::List => {
            for order in api.orders.get_orders().await? {
                print_order(&order);
            }
        }
        OrderCmds::Get { id } => {
            let order = api.orders.get_order(id).await?;
            print_order(&order);
            for line in &order.order_items {
                let name = line
                    .menu
                    .as_ref()
                    .map(|menu| menu.name.as_str())
                    .unwrap_or("(unknown menu)");
                println!(
                    "      {} x{} @ {}",
                    name,
                    line.quantity,
                    format_currency(line.price)
                );
            }
        }
        OrderCmds::Period {
            start,
            end,
            min_amount,
            max_amount,
            menu_id,
            category_id,
            sort_by,
            order,
        } => {
            let start = parse_wire_date(&start).map_err(anyhow::Error::msg)?;
            let end = parse_wire_date(&end).map_err(anyhow::Error::msg)?;

            let mut filter = PeriodFilter::default();
            filter.min_amount = min_amount;
            filter.max_amount = max_amount;
            filter.menu_id = menu_id;
            filter.category_id = category_id;
            filter.sort_by = sort_by.map(SortField::from);
            filter.order = order.map(SortOrder::from);

            let response = api.orders.get_orders_by_period(start, end, &filter).await?;
            println!(
                "{} orders between {} and {}",
                response.count, response.start_date, response.end_date
            );
            for order in &response.orders {
                print_order(order);
            }
        }
    }
    Ok(())
}

/// Pay first, then submit the order. The two calls are independent on the
/// backend; when payment succeeds and order submission fails there is no
/// rollback, so say so loudly instead of pretending otherwise.
async fn run_checkout(api: &KioskApi, args: CheckoutArgs) -> anyhow::Result<()> {
    let mut cart = Cart::new();
    for entry in &args.items {
        let (menu_id, quantity) = parse_cart_entry(entry)?;
        let menu = api
            .menus
            .get_menu(menu_id)
            .await
            .with_context(|| format!("menu {} not available", menu_id))?;
        cart.add(menu);
        cart.set_quantity(menu_id, quantity);
    }

    let receipt = cart.to_order_data(current_timestamp());
    let total = receipt.total_amount;
    for line in &receipt.items {
        println!(
            "  {} x{} @ {}",
            line.item.name,
            line.quantity,
            format_currency(line.item.price)
        );
    }
    println!("cart total: {}", format_currency(total));

    let payment = api.payment.request_payment(total).await?;
    print_payment(&payment);
    if !payment.success {
        bail!("payment was not confirmed, order not submitted");
    }

    match api.payment.post_order(cart.items()).await {
        Ok(order) => {
            println!(
                "order {} submitted, total {}",
                order.id,
                format_currency(order.total_price)
            );
            cart.clear();
            Ok(())
        }
        Err(e) => {
            bail!(
                "payment of {} was confirmed but order submission failed: {}. \
                 The charge stands; resolve it with staff.",
                format_currency(total),
                e
            );
        }
    }
}

fn run_resolve(path: &str) {
    match routes::resolve(path) {
        Some(found) => {
            println!("{} -> {:?} ({})", path, found.view, found.name);
            for (key, value) in &found.params {
                println!("  {} = {}", key, value);
            }
        }
        None => println!("{} does not match any route", path),
    }
}

fn parse_cart_entry(entry: &str) -> anyhow::Result<(u32, u32)> {
    let Some((menu_id, quantity)) = entry.split_once(':') else {
        bail!("invalid cart entry '{}', expected MENU_ID:QUANTITY", entry);
    };
    let menu_id = menu_id
        .parse::<u32>()
        .with_context(|| format!("invalid menu id in '{}'", entry))?;
    let quantity = quantity
        .parse::<u32>()
        .with_context(|| format!("invalid quantity in '{}'", entry))?;
    if quantity == 0 {
        bail!("quantity must be at least 1 in '{}'", entry);
    }
    Ok((menu_id, quantity))
}

fn menu_form(
    category_id: u32,
    name: String,
    price: i64,
    image: Option<String>,
) -> anyhow::Result<MenuForm> {
    let mut form = MenuForm::new(category_id, name, price);
    if let Some(path) = image {
        form = form.with_image(load_image(&path)?);
    }
    Ok(form)
}

fn load_image(path: &str) -> anyhow::Result<ImageUpload> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read image '{}'", path))?;
    let file_name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    Ok(ImageUpload {
        mime_type: mime_for(&file_name).to_string(),
        file_name,
        bytes,
    })
}

fn mime_for(file_name: &str) -> &'static str {
    match file_name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

fn print_menu(menu: &MenuItem) {
    let image = menu.image_url.as_deref().unwrap_or("-");
    println!(
        "{:>4}  {}  {}  [category {}]  {}",
        menu.id,
        menu.name,
        format_currency(menu.price),
        menu.category_id,
        image
    );
}

fn print_order(order: &Order) {
    println!(
        "{:>4}  {}  {} items  ({})",
        order.id,
        format_currency(order.total_price),
        order.order_items.len(),
        order.created_at
    );
}

fn print_payment(payment: &PaymentResponse) {
    let state = if payment.success { "confirmed" } else { "failed" };
    println!("payment {}: {}", state, payment.message);
    if let Some(details) = &payment.details {
        if let Some(expected) = details.expected_amount {
            println!("  expected amount: {}", format_currency(expected));
        }
        if let Some(change) = details.actual_change {
            println!("  actual change:   {}", format_currency(change));
        }
        if let Some(timeout) = &details.timeout_after {
            println!("  timed out after: {}", timeout);
        }
    }
}
