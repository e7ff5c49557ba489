use crate::models::TrackResponse;

const RULE_ACTIVITY: &str = "================";
const RULE_INFO: &str = "============";

/// Human-readable report of a track response, as printed by the CLI.
pub fn render_track_response(response: &TrackResponse) -> String {
    let shipment = &response.shipment;
    let package = &shipment.package;
    let mut out = String::new();

    out.push_str(&format!("Tracking Number: {}\n", package.tracking_number));
    out.push('\n');

    out.push_str("Package Activity\n");
    out.push_str(&format!("{}\n", RULE_ACTIVITY));
    out.push('\n');
    if package.activity.is_empty() {
        out.push_str("No activity recorded\n\n");
    }
    for activity in &package.activity {
        out.push_str(&format!("{}\n", activity));
        out.push('\n');
    }

    out.push_str("Package Info\n");
    out.push_str(&format!("{}\n", RULE_INFO));
    out.push('\n');
    out.push_str(&format!("Service: {}\n", shipment.service));
    out.push_str(&format!("Shipper: {}\n", shipment.shipper_number));
    out.push_str(&format!("Weight: {}\n", shipment.shipment_weight));

    if !package.package_weight.weight.is_empty() {
        out.push_str(&format!("Package weight: {}\n", package.package_weight));
    }
    if !shipment.pickup_date.is_empty() {
        out.push_str(&format!("Pickup date: {}\n", shipment.pickup_date));
    }
    let delivery = &shipment.delivery_detail;
    if !delivery.date.is_empty() {
        out.push_str(&format!("Delivery: {} {}\n", delivery.kind, delivery.date));
    }
    for address in &shipment.shipment_address {
        out.push_str(&format!("{}: {}\n", address.kind, address.address));
    }
    for option in &package.package_service_option {
        out.push_str(&format!("Option: {}\n", option.kind));
    }
    if !package.message.description.is_empty() {
        out.push_str(&format!("Message: {}\n", package.message));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CodeDescr, Package, Shipment, UnitOfMeasurement, Weight};

    #[test]
    fn renders_summary_fields() {
        let response = TrackResponse {
            shipment: Shipment {
                package: Package {
                    tracking_number: "1Z12345E0205271688".to_string(),
                    ..Default::default()
                },
                shipper_number: "12345E".to_string(),
                service: CodeDescr {
                    code: "003".to_string(),
                    description: "UPS GROUND".to_string(),
                },
                shipment_weight: Weight {
                    unit_of_measurement: UnitOfMeasurement {
                        code: "LBS".to_string(),
                    },
                    weight: "2.00".to_string(),
                },
                ..Default::default()
            },
            ..Default::default()
        };

        let out = render_track_response(&response);

        assert!(out.starts_with("Tracking Number: 1Z12345E0205271688\n"));
        assert!(out.contains("No activity recorded"));
        assert!(out.contains("Service: UPS GROUND (003)\n"));
        assert!(out.contains("Shipper: 12345E\n"));
        assert!(out.contains("Weight: 2.00 LBS\n"));
        assert!(!out.contains("Pickup date"));
    }
}
