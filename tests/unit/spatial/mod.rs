mod schematic;
