//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `widgets` table (caller-supplied integer id)
/// - `gadgets` table (caller-supplied integer id)
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Widgets
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS widgets (
    id INTEGER PRIMARY KEY NOT NULL,
    description TEXT NOT NULL,
    price REAL NOT NULL,
    gears INTEGER NOT NULL,
    sprockets INTEGER NOT NULL
);

-- ---------------------------------------------------------------------------
-- Gadgets
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS gadgets (
    id INTEGER PRIMARY KEY NOT NULL,
    description TEXT NOT NULL,
    price REAL NOT NULL,
    cylinders INTEGER NOT NULL
);
"#;

/// Demo inventory. `OR IGNORE` keeps restarts against a populated file harmless.
pub const SQLITE_DEMO_SEED: &str = r#"
INSERT OR IGNORE INTO widgets (id, description, price, gears, sprockets) VALUES
    (1, 'Low Impact Widget', 12.99, 2, 3),
    (2, 'Medium Impact Widget', 42.99, 5, 5),
    (3, 'High Impact Widget', 89.99, 10, 8);

INSERT OR IGNORE INTO gadgets (id, description, price, cylinders) VALUES
    (1, 'Two Cylinder Gadget', 19.99, 2),
    (2, 'Four Cylinder Gadget', 29.99, 4),
    (3, 'Eight Cylinder Gadget', 49.99, 8);
"#;
