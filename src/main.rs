//! Alba Browse - Demo Shell
//!
//! A small text front end standing in for the web renderer: it prints the
//! declarative frames the browsing core produces and maps line commands
//! onto the interactions a real shell would deliver (order selection,
//! search keystrokes, drawer toggles, outside clicks).

use std::{
    env::args,
    error::Error,
    io::{BufRead, Write, stdin, stdout},
    path::Path,
    sync::Arc,
};

use {
    tracing::info,
    tracing_subscriber::EnvFilter,
};

use alba_browse::{
    AlbumListView, ArtistListView, Catalog, FieldPath, InteractionHub, LibraryError, ListFrame,
    ResultExt, SettingsManager, Sidebar,
    ui::{ListHeader, RegionId, TitleHook},
};

/// Region layout of the demo shell.
const SIDEBAR_REGION: RegionId = 1;
const ARTIST_SEARCH_REGION: RegionId = 2;
const ALBUM_SEARCH_REGION: RegionId = 3;

/// Which list the shell is currently showing.
#[derive(Clone, Copy)]
enum ActiveView {
    Artists,
    Albums,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings_manager = load_settings()?;
    let settings = settings_manager.get_settings().clone();
    let catalog = load_catalog();
    info!(
        artists = catalog.artists.len(),
        albums = catalog.albums.len(),
        "catalog ready"
    );

    // The shell's idea of a window title.
    let title_hook: TitleHook = Arc::new(|title: &str| println!(":: {title}"));

    let hub = InteractionHub::new();
    let sidebar = Sidebar::mount(SIDEBAR_REGION, &hub, settings.sidebar_persistent);

    let mut artists = ArtistListView::new(
        &catalog.artists,
        settings.default_artist_order.clone(),
        settings.search_drawer_persistent,
        Some(title_hook.clone()),
    )?;
    let mut albums = AlbumListView::new(
        &catalog.albums,
        settings.default_album_order.clone(),
        settings.search_drawer_persistent,
        Some(title_hook),
    )?;
    if !settings.search_drawer_persistent {
        artists.mount_search(ARTIST_SEARCH_REGION, &hub);
        albums.mount_search(ALBUM_SEARCH_REGION, &hub);
    }

    let artist_events = artists.controller().subscribe();
    let album_events = albums.controller().subscribe();

    let mut active = ActiveView::Artists;
    render(&artists.frame(), &sidebar);
    print_help();

    let input = stdin();
    loop {
        print!("> ");
        stdout().flush()?;
        let mut line = String::new();
        if input.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let (command, argument) = match line.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        let mut dirty = true;
        match command {
            "artists" => active = ActiveView::Artists,
            "albums" => active = ActiveView::Albums,
            "order" => header(active, &artists, &albums).change_order(FieldPath::parse(argument)),
            "find" => header(active, &artists, &albums).change_search(argument),
            "search" => header(active, &artists, &albums).toggle_search(),
            "menu" => sidebar.toggle(),
            "body" => hub.interact(None),
            "quit" | "exit" => break,
            "" => dirty = false,
            _ => {
                print_help();
                dirty = false;
            }
        }

        // Each state change arrives as exactly one event; drain them all
        // before drawing so one command never paints twice.
        while artist_events.try_recv().is_ok() || album_events.try_recv().is_ok() {}

        if dirty {
            let frame = match active {
                ActiveView::Artists => artists.frame(),
                ActiveView::Albums => albums.frame(),
            };
            render(&frame, &sidebar);
        }
    }

    Ok(())
}

/// Loads the user preferences under the shell's unified data error.
fn load_settings() -> Result<SettingsManager, LibraryError> {
    Ok(SettingsManager::new()?)
}

/// Loads the catalog given on the command line, falling back to the
/// built-in sample set.
fn load_catalog() -> Catalog {
    args()
        .nth(1)
        .and_then(|path| {
            Catalog::from_json_file(Path::new(&path))
                .add_contextf(format_args!("loading catalog from {path}"))
                .or_warn("falling back to the sample catalog")
        })
        .unwrap_or_else(Catalog::sample)
}

/// Picks the header the command should act on.
fn header<'a>(
    active: ActiveView,
    artists: &'a ArtistListView,
    albums: &'a AlbumListView,
) -> &'a ListHeader {
    match active {
        ActiveView::Artists => artists.header(),
        ActiveView::Albums => albums.header(),
    }
}

/// Draws one frame as plain text.
fn render(frame: &ListFrame, sidebar: &Sidebar) {
    let sidebar_frame = sidebar.frame();
    if sidebar_frame.open {
        println!("[menu]");
        for entry in &sidebar_frame.entries {
            println!("  {} {}", entry.icon, entry.label);
        }
    }

    println!("== {} ==", frame.title);
    let options: Vec<String> = frame
        .header
        .order_options
        .iter()
        .map(|option| {
            if option.value == frame.header.order_by {
                format!("[{}]", option.label)
            } else {
                option.label.clone()
            }
        })
        .collect();
    let search = if frame.header.search_open {
        format!("search: \"{}\"", frame.header.search_value)
    } else {
        "search: (closed)".to_string()
    };
    println!("order by: {} | {}", options.join(" "), search);

    for item in &frame.items {
        println!("  {item}");
    }
    println!("({} shown)", frame.items.len());
}

fn print_help() {
    println!(
        "commands: artists | albums | order <field> | find <text> | search | menu | body | quit"
    );
}
