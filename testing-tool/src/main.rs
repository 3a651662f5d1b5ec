use colored::*;
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use std::io::{self, Write};

type ToolResult<T> = Result<T, Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() -> ToolResult<()> {
    println!("{}", "🚗 Vehicle Inventory Testing Tool".bright_blue().bold());
    println!("{}", "=================================".bright_blue());
    println!();

    let base_url = get_base_url()?;
    let client = Client::new();

    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 📃 Listar vehículos");
        println!("2. 🔁 Ejecutar escenario completo (crear → leer → actualizar → eliminar)");
        println!("3. 💰 Listar vehículos vendidos en inventario");
        println!("4. 🚪 Salir");
        print!("{}", "Selecciona una opción (1-4): ".bright_yellow());
        io::stdout().flush()?;

        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;

        match choice.trim() {
            "1" => {
                send(&client, Method::GET, &format!("{}/vehicle", base_url), None).await?;
            }
            "2" => {
                if let Err(e) = run_scenario(&client, &base_url).await {
                    println!("{} {}", "❌ Escenario fallido:".bright_red(), e);
                }
            }
            "3" => {
                send(&client, Method::GET, &format!("{}/sold-vehicles", base_url), None).await?;
            }
            "4" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
            }
        }
    }

    Ok(())
}

fn get_base_url() -> ToolResult<String> {
    print!("{}", "URL del servidor [http://localhost:5000]: ".bright_yellow());
    io::stdout().flush()?;
    let mut url = String::new();
    io::stdin().read_line(&mut url)?;
    let url = url.trim().trim_end_matches('/');

    if url.is_empty() {
        Ok("http://localhost:5000".to_string())
    } else {
        Ok(url.to_string())
    }
}

async fn send(
    client: &Client,
    method: Method,
    url: &str,
    body: Option<&Value>,
) -> ToolResult<(StatusCode, Value)> {
    println!("{} {} {}", "📤".bright_blue(), method, url);

    let mut request = client.request(method, url);
    if let Some(body) = body {
        request = request.json(body);
    }
    let response = request.send().await?;

    let status = response.status();
    let text = response.text().await?;
    let value: Value = serde_json::from_str(&text).unwrap_or(Value::String(text));

    let status_line = format!("📥 {}", status);
    if status.is_success() {
        println!("{}", status_line.bright_green());
    } else {
        println!("{}", status_line.bright_red());
    }
    if !value.is_null() && value != Value::String(String::new()) {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }

    Ok((status, value))
}

fn expect_status(step: &str, actual: StatusCode, expected: StatusCode) -> ToolResult<()> {
    if actual == expected {
        println!("{} {}", "✅".bright_green(), step);
        Ok(())
    } else {
        Err(format!("{}: esperado {}, recibido {}", step, expected, actual).into())
    }
}

async fn run_scenario(client: &Client, base_url: &str) -> ToolResult<()> {
    let vin = "1HGCM82633A123456";
    let vehicle_url = format!("{}/vehicle/{}", base_url, vin);

    let payload = json!({
        "vin_number": vin,
        "manufacturer_name": "Audi",
        "horse_power": 335,
        "model_name": "A8",
        "model_year": 2024,
        "purchase_price": 92000.00,
        "fuel_type": "Gasoline",
        "color": "Black",
        "vehicle_type": "Sedan"
    });

    let (status, created) = send(client, Method::POST, &format!("{}/vehicle", base_url), Some(&payload)).await?;
    expect_status("Crear vehículo", status, StatusCode::CREATED)?;
    if created["vin_number"] != vin.to_lowercase() {
        return Err("el VIN no se guardó en minúsculas".into());
    }

    let (status, _) = send(client, Method::GET, &vehicle_url, None).await?;
    expect_status("Obtener vehículo (VIN en mayúsculas)", status, StatusCode::OK)?;

    let update = json!({
        "manufacturer_name": "Audi",
        "horse_power": 335,
        "model_name": "A8",
        "model_year": 2022,
        "purchase_price": 92000.00,
        "fuel_type": "Gasoline",
        "color": "Black",
        "vehicle_type": "Sedan"
    });
    let (status, updated) = send(client, Method::PUT, &vehicle_url, Some(&update)).await?;
    expect_status("Actualizar vehículo", status, StatusCode::OK)?;
    if updated["model_year"] != 2022 || updated["description"] != created["description"] {
        return Err("la actualización no se aplicó como se esperaba".into());
    }

    let (status, _) = send(client, Method::DELETE, &vehicle_url, None).await?;
    expect_status("Eliminar vehículo", status, StatusCode::NO_CONTENT)?;

    let (status, _) = send(client, Method::GET, &vehicle_url, None).await?;
    expect_status("Vehículo eliminado ya no existe", status, StatusCode::NOT_FOUND)?;

    println!("{}", "🎉 Escenario completado".bright_green().bold());
    Ok(())
}
