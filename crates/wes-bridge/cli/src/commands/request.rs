//! `build-request`: READY event → ICAv2 WES request detail

use crate::output::{read_json_input, OutputOptions};
use anyhow::Result;
use wes_bridge_engine::handle_ready_event;
use wes_bridge_types::events::ICAV2_WES_REQUEST_DETAIL_TYPE;

pub fn execute(input: Option<&str>, output: &OutputOptions) -> Result<()> {
    let event = read_json_input(input)?;
    let detail = handle_ready_event(event)?;
    println!("{}", output.render(ICAV2_WES_REQUEST_DETAIL_TYPE, detail)?);
    Ok(())
}
