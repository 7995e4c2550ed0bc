//! Admin command handler

use crate::args::AdminSubcommand;
use registrar::config::Config;
use registrar::core::admin::AdminRecords;
use registrar::core::models::Admin;

/// Dispatch admin subcommands
pub fn run(subcommand: AdminSubcommand, config: &Config) {
    match subcommand {
        AdminSubcommand::Add {
            admin_num,
            full_name,
        } => {
            let paths = config.store_paths();
            let admin = Admin::new(admin_num, full_name);
            if let Err(e) = AdminRecords::new(&paths).append_admin(&admin) {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
            println!(
                "✓ Admin {} added to {}",
                admin.admin_num,
                paths.admin_file.display()
            );
        }
        AdminSubcommand::Show {
            admin_num,
            full_name,
        } => println!("{}", Admin::new(admin_num, full_name)),
    }
}
