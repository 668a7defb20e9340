mod caller;

use anyhow::anyhow;
use rocket::http::Status;

trait OrStatus<T> {
    fn or_status(self, status: Status, context: &'static str)
        -> Result<T, (Status, anyhow::Error)>;
}

impl<T> OrStatus<T> for Option<T> {
    fn or_status(
        self,
        status: Status,
        context: &'static str,
    ) -> Result<T, (Status, anyhow::Error)> {
        self.ok_or_else(|| (status, anyhow!(context)))
    }
}
