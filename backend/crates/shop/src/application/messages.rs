//! Notification texts (Telegram HTML)
//!
//! Buyer fields on [`Order`] are escaped at validation time; anything that
//! comes from an upstream API is escaped here.

use platform::text::{format_rupiah, html_escape};

use crate::domain::order::{Order, PanelCredentials};
use crate::domain::plan::Plan;

fn megabytes(value: u64) -> String {
    if value == 0 {
        "Unlimited".to_string()
    } else {
        format!("{value} MB")
    }
}

fn percent(value: u64) -> String {
    if value == 0 {
        "Unlimited".to_string()
    } else {
        format!("{value}%")
    }
}

pub fn transaction_succeeded(order: &Order, credentials: &PanelCredentials) -> String {
    let token = credentials.warranty_token.as_deref().unwrap_or("-");
    format!(
        "🎉 <b>TRANSAKSI BARU BERHASIL</b>\n\n\
         📦 <b>Order ID:</b> {}\n\
         👤 <b>Username:</b> {}\n\
         📧 <b>Email:</b> {}\n\
         💰 <b>Plan:</b> {}\n\
         💵 <b>Amount:</b> {}\n\
         🆔 <b>Server ID:</b> {}\n\
         🔑 <b>Token Garansi:</b> <code>{}</code>\n\n\
         ✅ Panel telah dikirim ke user",
        order.order_id,
        order.username,
        order.email,
        order.plan_id.to_uppercase(),
        format_rupiah(order.amount),
        credentials.server_id,
        token,
    )
}

pub fn payment_failed(order: &Order, status: &str) -> String {
    format!(
        "❌ <b>PEMBAYARAN GAGAL</b>\n\n\
         📦 <b>Order ID:</b> {}\n\
         💵 <b>Amount:</b> {}\n\
         ❌ <b>Status:</b> {}",
        order.order_id,
        format_rupiah(order.amount),
        html_escape(&status.to_uppercase()),
    )
}

pub fn provisioning_failed(order: &Order, reason: &str) -> String {
    format!(
        "❌ <b>GAGAL BUAT SERVER</b>\n\n\
         📦 <b>Order ID:</b> {}\n\
         👤 <b>Username:</b> {}\n\
         💵 <b>Amount:</b> {}\n\
         ❌ <b>Error:</b> {}\n\n\
         ⚠️ Pembayaran berhasil tapi gagal membuat panel",
        order.order_id,
        order.username,
        format_rupiah(order.amount),
        html_escape(reason),
    )
}

pub fn product_created(plan: &Plan, admin: &str) -> String {
    format!(
        "🆕 <b>PRODUK BARU DITAMBAHKAN</b>\n\n\
         🏷️ <b>ID:</b> {}\n\
         💰 <b>Harga:</b> {}\n\
         💾 <b>RAM:</b> {}\n\
         📦 <b>Disk:</b> {}\n\
         ⚡ <b>CPU:</b> {}\n\n\
         👤 <b>Oleh:</b> {}",
        plan.id,
        format_rupiah(plan.price),
        megabytes(plan.specs.ram),
        megabytes(plan.specs.disk),
        percent(plan.specs.cpu),
        html_escape(admin),
    )
}

pub fn product_updated(old: &Plan, new: &Plan, admin: &str) -> String {
    format!(
        "✏️ <b>PRODUK DIUPDATE</b>\n\n\
         🏷️ <b>ID:</b> {}\n\n\
         <b>Harga:</b>\n\
         ❌ Lama: {}\n\
         ✅ Baru: {}\n\n\
         <b>Spek:</b>\n\
         💾 RAM: {} → {}\n\
         📦 Disk: {} → {}\n\
         ⚡ CPU: {} → {}\n\n\
         👤 <b>Oleh:</b> {}",
        new.id,
        format_rupiah(old.price),
        format_rupiah(new.price),
        megabytes(old.specs.ram),
        megabytes(new.specs.ram),
        megabytes(old.specs.disk),
        megabytes(new.specs.disk),
        percent(old.specs.cpu),
        percent(new.specs.cpu),
        html_escape(admin),
    )
}

pub fn product_deleted(plan: &Plan, admin: &str) -> String {
    format!(
        "🗑️ <b>PRODUK DIHAPUS</b>\n\n\
         🏷️ <b>ID:</b> {}\n\
         💰 <b>Harga:</b> {}\n\
         💾 <b>RAM:</b> {}\n\
         📦 <b>Disk:</b> {}\n\
         ⚡ <b>CPU:</b> {}\n\n\
         👤 <b>Oleh:</b> {}",
        plan.id,
        format_rupiah(plan.price),
        megabytes(plan.specs.ram),
        megabytes(plan.specs.disk),
        percent(plan.specs.cpu),
        html_escape(admin),
    )
}
