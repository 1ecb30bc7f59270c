pub mod tienda;
