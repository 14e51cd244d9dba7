mod entry;
mod logger;

use barrage::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
